use axum::Router;

pub mod cards;
pub mod system;
pub mod users;

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/users", users::router())
        .nest("/cards", cards::router())
}
