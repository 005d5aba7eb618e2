use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, put},
    Json, Router,
};

use mesto_core::{Card, CardId, DomainError};

use crate::app::errors::{ApiError, ApiResult};
use crate::app::{dto, services::AppServices};
use crate::context::CurrentUser;
use crate::extract::ValidJson;

pub fn router() -> Router {
    Router::new()
        .route("/", get(get_cards).post(create_card))
        .route("/:id", delete(delete_card))
        .route("/:id/likes", put(like_card).delete(dislike_card))
}

pub async fn get_cards(
    Extension(services): Extension<Arc<AppServices>>,
) -> ApiResult<impl IntoResponse> {
    let cards = services.cards.find_all().await?;
    Ok(Json(
        cards.iter().map(dto::card_to_json).collect::<Vec<_>>(),
    ))
}

/// POST /cards. The owner is always the authenticated caller.
pub async fn create_card(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    ValidJson(body): ValidJson<dto::CreateCardRequest>,
) -> ApiResult<impl IntoResponse> {
    let card = Card::new(body.name, body.link, current.user_id());
    let card = services.cards.insert(card).await?;

    Ok((StatusCode::CREATED, Json(dto::card_to_json(&card))))
}

/// DELETE /cards/:id. Ownership is checked before anything is deleted, so
/// a forbidden attempt leaves the card in storage.
pub async fn delete_card(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id: CardId = id.parse()?;

    let card = services.cards.find_by_id(id).await?.ok_or_else(not_found)?;
    if !card.is_owned_by(current.user_id()) {
        return Err(DomainError::forbidden("Доступ к операции запрещён").into());
    }

    // Owner-filtered delete: a concurrent removal between the check and
    // here surfaces as NotFound rather than deleting someone else's card.
    let card = services
        .cards
        .delete_owned(id, current.user_id())
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(dto::card_to_json(&card)))
}

/// PUT /cards/:id/likes. Idempotent set add.
pub async fn like_card(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id: CardId = id.parse()?;
    let card = services
        .cards
        .add_like(id, current.user_id())
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(dto::card_to_json(&card)))
}

/// DELETE /cards/:id/likes. Removing an absent liker is a no-op.
pub async fn dislike_card(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id: CardId = id.parse()?;
    let card = services
        .cards
        .remove_like(id, current.user_id())
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(dto::card_to_json(&card)))
}

fn not_found() -> ApiError {
    DomainError::not_found("Карточка не найдена").into()
}
