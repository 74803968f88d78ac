use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::users::dto::UserResponse;
use crate::validation::{check_email, check_fullname, check_password, normalize_email};

/// Request body for user registration (also `POST /users`).
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub fullname: String,
    pub email: String,
    pub password: String,
}

/// Cleaned registration values produced by `RegisterRequest::validate`.
#[derive(Debug)]
pub struct NewAccount {
    pub fullname: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(self) -> Result<NewAccount, ApiError> {
        let fullname = self.fullname.trim().to_string();
        let email = normalize_email(&self.email);

        let mut errors = Vec::new();
        check_fullname(&fullname, &mut errors);
        check_email(&email, &mut errors);
        check_password(&self.password, &mut errors);
        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        Ok(NewAccount {
            fullname,
            email,
            password: self.password,
        })
    }
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(self) -> Result<(String, String), ApiError> {
        let email = normalize_email(&self.email);

        let mut errors = Vec::new();
        check_email(&email, &mut errors);
        if self.password.is_empty() {
            errors.push("password must not be empty".to_string());
        }
        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        Ok((email, self.password))
    }
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
    #[serde(rename = "expiresIn")]
    pub expires_in: String,
}
