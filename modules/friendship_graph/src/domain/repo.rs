use async_trait::async_trait;

/// Outcome of inserting the canonical row for a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeInsert {
    Inserted,
    /// The unique index on the pair already holds a row. Reported as data,
    /// not as an error, so the service can map it to its own taxonomy.
    AlreadyFriends,
}

/// Repository port for the friendship graph.
///
/// Callers pass the canonical ordering (`lo < hi`); reads still match either
/// stored orientation so a legacy non-canonical row cannot hide an edge.
#[async_trait]
pub trait FriendshipRepository: Send + Sync {
    /// Insert the canonical row `(lo, hi)`. The unique index decides
    /// `AlreadyFriends`, so two concurrent inserts of the same pair cannot
    /// both succeed.
    async fn insert_pair(&self, lo: i64, hi: i64) -> anyhow::Result<EdgeInsert>;

    /// Delete any row matching the unordered pair. Returns rows removed
    /// (0 when the friendship did not exist).
    async fn delete_pair(&self, lo: i64, hi: i64) -> anyhow::Result<u64>;

    /// Ids of all users connected to `user_id`, ascending.
    async fn friend_ids_of(&self, user_id: i64) -> anyhow::Result<Vec<i64>>;
}
