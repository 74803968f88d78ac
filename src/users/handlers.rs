use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{info, instrument};

use crate::auth::extractors::AuthUser;
use crate::auth::password::hash_password;
use crate::auth::policy;
use crate::error::ApiError;
use crate::state::AppState;
use crate::users::dto::{UpdateUserRequest, UserResponse};
use crate::users::repo_types::User;
use crate::validation::PathId;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(list_users).post(crate::auth::handlers::register),
        )
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    if !policy::can_list_users(&claims) {
        return Err(ApiError::Forbidden("admin privileges required"));
    }
    let users = User::list(&state.db).await?;
    Ok(Json(users.into_iter().map(UserResponse::full).collect()))
}

/// Any authenticated caller may look a user up; the email field is only
/// included for the owner or an admin.
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    PathId(id): PathId,
) -> Result<Json<UserResponse>, ApiError> {
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("user"))?;
    let include_email = policy::can_view_email(&claims, user.id);
    Ok(Json(UserResponse::projected(user, include_email)))
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    PathId(id): PathId,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    if !policy::can_act_on_user(&claims, id) {
        return Err(ApiError::Forbidden("you cannot modify this account"));
    }

    let patch = payload.validate()?;
    let password_hash = match patch.password {
        Some(ref password) => Some(hash_password(password)?),
        None => None,
    };

    let user = User::update(
        &state.db,
        id,
        patch.fullname.as_deref(),
        patch.email.as_deref(),
        password_hash.as_deref(),
    )
    .await?
    .ok_or(ApiError::NotFound("user"))?;

    info!(user_id = user.id, "user updated");
    Ok(Json(UserResponse::full(user)))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    PathId(id): PathId,
) -> Result<StatusCode, ApiError> {
    if !policy::can_act_on_user(&claims, id) {
        return Err(ApiError::Forbidden("you cannot delete this account"));
    }

    if !User::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("user"));
    }

    info!(user_id = id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}
