//! Card persistence: trait plus in-memory and MongoDB implementations.

use async_trait::async_trait;

use mesto_core::{Card, CardId, DomainResult, UserId};

mod in_memory;
mod mongo;

pub use in_memory::InMemoryCardStore;
pub use mongo::MongoCardStore;

/// Persistence operations over the `cards` collection.
///
/// Like/unlike are atomic set mutations (no read-modify-write), so two
/// concurrent likers cannot lose each other's update. All lookups return
/// `Ok(None)` for a missing card.
#[async_trait]
pub trait CardStore: Send + Sync {
    async fn insert(&self, card: Card) -> DomainResult<Card>;

    async fn find_all(&self) -> DomainResult<Vec<Card>>;

    async fn find_by_id(&self, id: CardId) -> DomainResult<Option<Card>>;

    /// Delete `id` only if `owner` matches, returning the deleted card.
    /// The owner filter keeps check-then-delete atomic.
    async fn delete_owned(&self, id: CardId, owner: UserId) -> DomainResult<Option<Card>>;

    /// Add `user` to the likes set (no-op if already present) and return
    /// the updated card.
    async fn add_like(&self, id: CardId, user: UserId) -> DomainResult<Option<Card>>;

    /// Remove `user` from the likes set (no-op if absent) and return the
    /// updated card.
    async fn remove_like(&self, id: CardId, user: UserId) -> DomainResult<Option<Card>>;
}
