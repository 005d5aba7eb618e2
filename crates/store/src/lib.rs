//! `mesto-store` — persistence boundary.
//!
//! Store traits plus two implementations each: in-memory (tests/dev) and
//! MongoDB (production). Driver failures are mapped into the domain error
//! taxonomy here so the layers above never see driver types.

pub mod cards;
pub mod mongo;
pub mod users;

pub use cards::{CardStore, InMemoryCardStore, MongoCardStore};
pub use users::{InMemoryUserStore, MongoUserStore, UserStore};
