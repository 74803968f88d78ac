use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

/// Everything a handler can fail with. Each variant maps to exactly one
/// HTTP status; anything unclassified becomes `Internal` and a 500.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(Vec<String>),
    #[error("{0}")]
    AuthenticationRequired(&'static str),
    /// Unknown email and wrong password collapse into this one variant so
    /// the two cases stay indistinguishable to the client.
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("{0}")]
    Forbidden(&'static str),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("email already registered")]
    DuplicateEmail,
    #[error("too many attempts")]
    RateLimited,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::AuthenticationRequired(_) | ApiError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::DuplicateEmail => StatusCode::CONFLICT,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    db_code(e).as_deref() == Some("23505")
}

pub fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    db_code(e).as_deref() == Some("23503")
}

fn db_code(e: &sqlx::Error) -> Option<String> {
    e.as_database_error()
        .and_then(|db| db.code())
        .map(|c| c.into_owned())
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation(&e) {
            return ApiError::DuplicateEmail;
        }
        if is_foreign_key_violation(&e) {
            return ApiError::NotFound("resource");
        }
        match e {
            sqlx::Error::RowNotFound => ApiError::NotFound("resource"),
            other => ApiError::Internal(other.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Validation(errors) => {
                json!({ "message": "validation failed", "errors": errors })
            }
            ApiError::Internal(e) => {
                error!(error = %e, "internal error");
                if production() {
                    json!({ "message": "internal server error" })
                } else {
                    json!({ "message": "internal server error", "detail": format!("{e:#}") })
                }
            }
            other => json!({ "message": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

fn production() -> bool {
    std::env::var("APP_ENV")
        .map(|v| v == "production")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_and_forbidden_are_distinct_statuses() {
        assert_eq!(
            ApiError::AuthenticationRequired("missing Authorization header").status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Forbidden("admin privileges required").status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn status_mapping_matches_taxonomy() {
        assert_eq!(
            ApiError::Validation(vec!["bad".into()]).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidCredentials.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::NotFound("user").status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::DuplicateEmail.status(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::RateLimited.status(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn validation_body_lists_field_errors() {
        let resp = ApiError::Validation(vec![
            "fullname must be 3-100 characters".into(),
            "email must be a valid address".into(),
        ])
        .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "validation failed");
        assert_eq!(body["errors"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn invalid_credentials_body_is_uniform() {
        let resp = ApiError::InvalidCredentials.into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "invalid credentials");
    }
}
