//! Friendship graph: symmetric, deduplicated "is-friend-of" edges over the
//! user directory's vertex set.
//!
//! A friendship is stored as one canonical row per unordered pair
//! (`amigo_1 < amigo_2`) guarded by a unique index, so the symmetry and
//! no-duplicates invariants are constraints of the store rather than
//! check-then-act logic.

pub mod api;
pub mod domain;
pub mod infra;
