//! Request body extraction: parse, then validate, before the handler runs.

use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use validator::Validate;

use mesto_core::DomainError;

use crate::app::errors::ApiError;

/// A JSON body that has passed schema validation.
///
/// Malformed JSON and failed validation rules both short-circuit with the
/// same 400 before any handler logic or store call, so a rejected request
/// can never leave a partial persistence side effect.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: serde::de::DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| DomainError::validation("Переданы некорректные данные"))?;

        value
            .validate()
            .map_err(|_| DomainError::validation("Переданы некорректные данные"))?;

        Ok(Self(value))
    }
}
