//! User persistence: trait plus in-memory and MongoDB implementations.

use async_trait::async_trait;

use mesto_core::{DomainResult, User, UserId};

mod in_memory;
mod mongo;

pub use in_memory::InMemoryUserStore;
pub use mongo::MongoUserStore;

/// Persistence operations over the `users` collection.
///
/// Lookups return `Ok(None)` for a missing record; the route layer decides
/// which not-found message that becomes. `insert` fails with `Conflict` on
/// a duplicate email.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, user: User) -> DomainResult<User>;

    async fn find_all(&self) -> DomainResult<Vec<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    /// Lookup for the signin flow; the returned record includes the
    /// password hash.
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Set only the provided profile fields, returning the updated record.
    async fn update_profile(
        &self,
        id: UserId,
        name: Option<String>,
        about: Option<String>,
    ) -> DomainResult<Option<User>>;

    async fn update_avatar(&self, id: UserId, avatar: String) -> DomainResult<Option<User>>;
}
