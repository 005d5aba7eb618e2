//! Consistent error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use mesto_core::DomainError;

/// Result alias for handlers: every failure funnels through [`ApiError`].
pub type ApiResult<T> = Result<T, ApiError>;

/// Response-boundary wrapper around the domain taxonomy.
///
/// This is the terminal formatting point: whatever a handler, extractor or
/// middleware raises is turned into the uniform envelope here, and nowhere
/// else.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            DomainError::Auth(msg) => (StatusCode::UNAUTHORIZED, msg),
            DomainError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            DomainError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            DomainError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            DomainError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            DomainError::Internal(detail) => {
                // The detail stays in the server log only.
                tracing::error!(%detail, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "На сервере произошла ошибка".to_string(),
                )
            }
        };

        // Runs inside the request span, so this line carries the request id.
        if !status.is_server_error() {
            tracing::warn!(%status, %message, "request rejected");
        }

        (
            status,
            Json(json!({
                "message": message,
                "status": "error",
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn every_kind_maps_to_its_status() {
        let cases = [
            (DomainError::auth("a"), StatusCode::UNAUTHORIZED),
            (DomainError::validation("v"), StatusCode::BAD_REQUEST),
            (DomainError::not_found("n"), StatusCode::NOT_FOUND),
            (DomainError::conflict("c"), StatusCode::CONFLICT),
            (DomainError::forbidden("f"), StatusCode::FORBIDDEN),
            (DomainError::internal("i"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }

    #[tokio::test]
    async fn internal_detail_never_reaches_the_client() {
        let response = ApiError::from(DomainError::internal("connection refused")).into_response();

        let body = body_json(response).await;
        assert_eq!(body["message"], "На сервере произошла ошибка");
        assert_eq!(body["status"], "error");
    }

    #[tokio::test]
    async fn client_errors_keep_their_message_in_the_envelope() {
        let response = ApiError::from(DomainError::not_found("Карточка не найдена")).into_response();

        let body = body_json(response).await;
        assert_eq!(body["message"], "Карточка не найдена");
        assert_eq!(body["status"], "error");
    }
}
