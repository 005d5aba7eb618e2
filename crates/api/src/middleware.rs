use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

use mesto_auth::TokenVerifier;
use mesto_core::DomainError;

use crate::app::errors::ApiError;
use crate::context::CurrentUser;

/// Name of the session cookie carrying the signed token.
pub const SESSION_COOKIE: &str = "jwt";

#[derive(Clone)]
pub struct AuthState {
    pub tokens: Arc<dyn TokenVerifier>,
}

/// Verify the session cookie and attach the caller's identity.
///
/// A missing cookie and every verification failure produce the same 401;
/// the reason is deliberately not distinguished to the client.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token = session_cookie(req.headers())
        .ok_or_else(|| DomainError::auth("Необходима авторизация"))?;

    let user_id = state
        .tokens
        .verify(token)
        .map_err(|_| DomainError::auth("Необходима авторизация"))?;

    req.extensions_mut().insert(CurrentUser::new(user_id));

    Ok(next.run(req).await)
}

/// Wrap each request in a span carrying a fresh request id, and log the
/// request and its outcome status.
pub async fn request_span(req: Request<Body>, next: Next) -> Response {
    let request_id = Uuid::now_v7();
    let span = tracing::info_span!(
        "request",
        %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    async move {
        let res = next.run(req).await;
        tracing::info!(status = %res.status(), "request completed");
        res
    }
    .instrument(span)
    .await
}

fn session_cookie(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .map(str::trim)
        .find_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            (name == SESSION_COOKIE).then_some(value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn finds_the_session_cookie_among_others() {
        let headers = headers("theme=dark; jwt=abc.def.ghi; lang=ru");
        assert_eq!(session_cookie(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn missing_session_cookie_is_none() {
        let headers = headers("theme=dark; lang=ru");
        assert_eq!(session_cookie(&headers), None);
    }

    #[test]
    fn no_cookie_header_is_none() {
        assert_eq!(session_cookie(&HeaderMap::new()), None);
    }
}
