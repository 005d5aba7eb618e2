use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use chrono::Utc;

use mesto_auth::{password, Hs256TokenCodec, SESSION_TTL_SECS};
use mesto_core::{DomainError, User, UserId};

use crate::app::errors::{ApiError, ApiResult};
use crate::app::{dto, services::AppServices};
use crate::context::CurrentUser;
use crate::extract::ValidJson;
use crate::middleware::SESSION_COOKIE;

pub fn router() -> Router {
    Router::new()
        .route("/", get(get_users))
        .route("/me", get(get_current_user).patch(update_profile))
        .route("/me/avatar", patch(update_avatar))
        .route("/:id", get(get_user_by_id))
}

/// POST /signup (public).
pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    ValidJson(body): ValidJson<dto::SignupRequest>,
) -> ApiResult<impl IntoResponse> {
    let hash = password::hash(&body.password)?;
    let user = User::new(body.email, hash, body.name, body.about, body.avatar);
    let user = services.users.insert(user).await?;

    Ok((StatusCode::CREATED, Json(dto::user_to_json(&user))))
}

/// POST /signin (public).
///
/// Unknown email and wrong password collapse into the identical 401 so the
/// response does not reveal which check failed.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tokens): Extension<Arc<Hs256TokenCodec>>,
    ValidJson(body): ValidJson<dto::SigninRequest>,
) -> ApiResult<impl IntoResponse> {
    let user = services
        .users
        .find_by_email(&body.email)
        .await?
        .ok_or_else(|| DomainError::auth("Неправильные почта или пароль"))?;

    if !password::verify(&body.password, &user.password) {
        return Err(DomainError::auth("Неправильные почта или пароль").into());
    }

    let token = tokens.sign(user.id, Utc::now())?;
    let cookie = format!(
        "{SESSION_COOKIE}={token}; Max-Age={SESSION_TTL_SECS}; Path=/; HttpOnly; SameSite=Strict"
    );

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(dto::user_to_json(&user)),
    ))
}

pub async fn get_users(
    Extension(services): Extension<Arc<AppServices>>,
) -> ApiResult<impl IntoResponse> {
    let users = services.users.find_all().await?;
    Ok(Json(
        users.iter().map(dto::user_to_json).collect::<Vec<_>>(),
    ))
}

pub async fn get_current_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
) -> ApiResult<impl IntoResponse> {
    let user = find_existing(&services, current.user_id()).await?;
    Ok(Json(dto::user_to_json(&user)))
}

pub async fn get_user_by_id(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    // Malformed ids are rejected here, before any store call.
    let id: UserId = id.parse()?;
    let user = find_existing(&services, id).await?;
    Ok(Json(dto::user_to_json(&user)))
}

/// PATCH /users/me. Operates on the context identity, never on a
/// caller-supplied id.
pub async fn update_profile(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    ValidJson(body): ValidJson<dto::UpdateProfileRequest>,
) -> ApiResult<impl IntoResponse> {
    let user = services
        .users
        .update_profile(current.user_id(), body.name, body.about)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(dto::user_to_json(&user)))
}

/// PATCH /users/me/avatar. Same identity discipline as the profile update.
pub async fn update_avatar(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    ValidJson(body): ValidJson<dto::UpdateAvatarRequest>,
) -> ApiResult<impl IntoResponse> {
    let user = services
        .users
        .update_avatar(current.user_id(), body.avatar)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(dto::user_to_json(&user)))
}

async fn find_existing(services: &AppServices, id: UserId) -> Result<User, ApiError> {
    services.users.find_by_id(id).await?.ok_or_else(not_found)
}

fn not_found() -> ApiError {
    DomainError::not_found("Пользователь с таким идентификатором не найден").into()
}
