use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRef, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use tracing::{info, instrument, warn};

use crate::auth::dto::{LoginRequest, LoginResponse, RegisterRequest};
use crate::auth::jwt::JwtKeys;
use crate::auth::password::{hash_password, verify_password, PHANTOM_HASH};
use crate::error::ApiError;
use crate::state::AppState;
use crate::users::dto::UserResponse;
use crate::users::repo_types::User;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

/// Also mounted as `POST /users`; the two routes are the same operation.
#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let account = payload.validate()?;

    let hash = hash_password(&account.password)?;

    // No existence pre-check: the unique index on email is the arbiter, so
    // concurrent duplicates produce exactly one row and the rest get 409.
    let user = User::create(&state.db, &account.fullname, &account.email, &hash).await?;

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok((StatusCode::CREATED, Json(UserResponse::full(user))))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    // Throttle before any credential work.
    if !state.login_limiter.try_acquire(addr.ip()) {
        warn!(client = %addr.ip(), "login rate limit exceeded");
        return Err(ApiError::RateLimited);
    }

    let (email, password) = payload.validate()?;

    let Some(user) = User::find_by_email(&state.db, &email).await? else {
        // Burn a real verification so the miss costs as much as a wrong
        // password, then answer exactly like one.
        let _ = verify_password(&password, &PHANTOM_HASH);
        warn!(email = %email, "login unknown email");
        return Err(ApiError::InvalidCredentials);
    };

    if !verify_password(&password, &user.password_hash)? {
        warn!(user_id = user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id, user.role)?;
    let expires_in = format!("{}m", state.config.jwt.ttl_minutes);

    info!(user_id = user.id, "user logged in");
    Ok(Json(LoginResponse {
        token,
        user: UserResponse::full(user),
        expires_in,
    }))
}
