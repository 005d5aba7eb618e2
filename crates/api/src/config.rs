//! Process configuration, read from the environment exactly once.
//!
//! Handlers never read env vars at call time; everything they need flows
//! through this struct into `build_app`.

use std::env;

/// Storage backend selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// MongoDB deployment (the production default).
    Mongo { host: String, db_name: String },
    /// In-memory stores: tests and local development without a database.
    InMemory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub jwt_secret: String,
    pub storage: StorageConfig,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        // Outside production the signing secret is always the dev default;
        // in production it must come from the environment.
        let production = env::var("NODE_ENV").is_ok_and(|v| v == "production");
        let jwt_secret = if production {
            env::var("JWT_SECRET").unwrap_or_else(|_| {
                tracing::warn!("JWT_SECRET not set in production; using insecure dev default");
                "secret-key".to_string()
            })
        } else {
            "secret-key".to_string()
        };

        let use_persistent = env::var("USE_PERSISTENT_STORE")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .unwrap_or(true);

        let storage = if use_persistent {
            StorageConfig::Mongo {
                host: env::var("MONGO_HOST")
                    .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
                db_name: env::var("DB_NAME").unwrap_or_else(|_| "mestodb".to_string()),
            }
        } else {
            StorageConfig::InMemory
        };

        Self {
            port,
            jwt_secret,
            storage,
        }
    }
}
