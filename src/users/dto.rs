use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::auth::claims::Role;
use crate::error::ApiError;
use crate::users::repo_types::User;
use crate::validation::{check_email, check_fullname, check_password, normalize_email};

/// User projection returned to clients. `email` is omitted entirely (not
/// nulled) when the caller may not see it.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub fullname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
    pub created_at: OffsetDateTime,
}

impl UserResponse {
    /// Full projection, for the owner or an admin.
    pub fn full(user: User) -> Self {
        Self::projected(user, true)
    }

    pub fn projected(user: User, include_email: bool) -> Self {
        Self {
            id: user.id,
            fullname: user.fullname,
            email: include_email.then_some(user.email),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Request body for `PUT /users/:id`. Every field is optional, but at least
/// one must be present.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Cleaned update produced by `UpdateUserRequest::validate`.
#[derive(Debug)]
pub struct UserPatch {
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UpdateUserRequest {
    pub fn validate(self) -> Result<UserPatch, ApiError> {
        if self.fullname.is_none() && self.email.is_none() && self.password.is_none() {
            return Err(ApiError::Validation(vec![
                "at least one of fullname, email, password is required".to_string(),
            ]));
        }

        let fullname = self.fullname.map(|f| f.trim().to_string());
        let email = self.email.map(|e| normalize_email(&e));

        let mut errors = Vec::new();
        if let Some(ref fullname) = fullname {
            check_fullname(fullname, &mut errors);
        }
        if let Some(ref email) = email {
            check_email(email, &mut errors);
        }
        if let Some(ref password) = self.password {
            check_password(password, &mut errors);
        }
        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        Ok(UserPatch {
            fullname,
            email,
            password: self.password,
        })
    }
}
