use axum::http::StatusCode;

use mesto_core::DomainError;

use crate::app::errors::ApiError;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Unmatched routes get the same envelope as any other NotFound.
pub async fn unknown_route() -> ApiError {
    DomainError::not_found("Запрашиваемый ресурс не найден").into()
}
