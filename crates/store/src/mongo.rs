//! MongoDB connection bootstrap and driver error mapping.

use bson::doc;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};

use mesto_core::{DomainError, DomainResult, User};

/// Server error code for a unique-index violation.
const DUPLICATE_KEY: i32 = 11000;

/// Connect to the configured deployment and prepare collection indexes.
///
/// Called once at startup; the returned handle is shared process-wide and
/// treated as read-only configuration thereafter.
pub async fn connect(host: &str, db_name: &str) -> DomainResult<Database> {
    let client = Client::with_uri_str(host).await.map_err(map_error)?;
    let db = client.database(db_name);
    ensure_indexes(&db).await?;
    tracing::info!(db = db_name, "connected to MongoDB");
    Ok(db)
}

/// Email uniqueness is enforced by the database, not by a read-then-write
/// check, so concurrent signups cannot race past it.
async fn ensure_indexes(db: &Database) -> DomainResult<()> {
    let users: Collection<User> = db.collection("users");
    let index = IndexModel::builder()
        .keys(doc! { "email": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build();
    users.create_index(index).await.map_err(map_error)?;
    Ok(())
}

pub(crate) fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(we)) => we.code == DUPLICATE_KEY,
        _ => false,
    }
}

/// Fallback mapping: the detail stays server-side (logged at the response
/// boundary), the client only ever sees the generic 500 message.
pub(crate) fn map_error(err: mongodb::error::Error) -> DomainError {
    DomainError::internal(format!("mongodb error: {err}"))
}
