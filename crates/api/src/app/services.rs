//! Store wiring: the persistence backend is chosen once at startup.

use std::sync::Arc;

use mesto_core::DomainResult;
use mesto_store::{
    CardStore, InMemoryCardStore, InMemoryUserStore, MongoCardStore, MongoUserStore, UserStore,
};

use crate::config::StorageConfig;

/// Shared handles to the chosen store implementations.
#[derive(Clone)]
pub struct AppServices {
    pub users: Arc<dyn UserStore>,
    pub cards: Arc<dyn CardStore>,
}

impl AppServices {
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserStore::new()),
            cards: Arc::new(InMemoryCardStore::new()),
        }
    }
}

/// Build services for the configured backend.
pub async fn build_services(storage: &StorageConfig) -> DomainResult<AppServices> {
    match storage {
        StorageConfig::InMemory => {
            tracing::info!("using in-memory stores");
            Ok(AppServices::in_memory())
        }
        StorageConfig::Mongo { host, db_name } => {
            let db = mesto_store::mongo::connect(host, db_name).await?;
            Ok(AppServices {
                users: Arc::new(MongoUserStore::new(&db)),
                cards: Arc::new(MongoCardStore::new(&db)),
            })
        }
    }
}
