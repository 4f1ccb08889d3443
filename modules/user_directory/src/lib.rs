//! User directory: identity records with registration, login and lookup.
//!
//! Layering follows the workspace convention: `contract` holds the
//! cross-module types and client trait, `domain` the business rules and the
//! repository port, `infra` the SeaORM adapter, `api` the REST surface.

pub mod api;
pub mod contract;
pub mod domain;
pub mod gateways;
pub mod infra;
