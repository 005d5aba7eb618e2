//! HTTP API application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: store wiring (in-memory or MongoDB)
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use mesto_auth::Hs256TokenCodec;
use mesto_core::DomainResult;

use crate::config::Config;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub async fn build_app(config: Config) -> DomainResult<Router> {
    let tokens = Arc::new(Hs256TokenCodec::new(config.jwt_secret.as_bytes()));
    let auth_state = middleware::AuthState {
        tokens: tokens.clone(),
    };

    let services = Arc::new(services::build_services(&config.storage).await?);

    // Protected routes: require a verified session cookie.
    let protected = routes::router().layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    Ok(Router::new()
        .route("/health", get(routes::system::health))
        .route("/signup", post(routes::users::create_user))
        .route("/signin", post(routes::users::login))
        .merge(protected)
        .fallback(routes::system::unknown_route)
        .layer(Extension(services))
        .layer(Extension(tokens))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(middleware::request_span)),
        ))
}
