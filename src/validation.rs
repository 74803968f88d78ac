//! Request-shape checks. Each request DTO reduces to either a cleaned
//! value or an ordered list of human-readable field errors, surfaced as a
//! single 400.

use axum::async_trait;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ApiError;

pub const FULLNAME_MIN: usize = 3;
pub const FULLNAME_MAX: usize = 100;
pub const PASSWORD_MIN: usize = 6;

pub fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Login identities are case-insensitive; emails are stored and compared
/// lowercased.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn check_fullname(fullname: &str, errors: &mut Vec<String>) {
    let len = fullname.chars().count();
    if !(FULLNAME_MIN..=FULLNAME_MAX).contains(&len) {
        errors.push(format!(
            "fullname must be {FULLNAME_MIN}-{FULLNAME_MAX} characters"
        ));
    }
}

pub fn check_email(email: &str, errors: &mut Vec<String>) {
    if !is_valid_email(email) {
        errors.push("email must be a valid address".to_string());
    }
}

pub fn check_password(password: &str, errors: &mut Vec<String>) {
    if password.chars().count() < PASSWORD_MIN {
        errors.push(format!("password must be at least {PASSWORD_MIN} characters"));
    } else if password.len() > crate::auth::password::MAX_PASSWORD_BYTES {
        errors.push(format!(
            "password must be at most {} bytes",
            crate::auth::password::MAX_PASSWORD_BYTES
        ));
    }
}

/// Path `:id` segment, validated as a positive integer before any handler
/// logic runs. Anything else is a uniform 400.
#[derive(Debug, Clone, Copy)]
pub struct PathId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid_id())?;
        let id: i64 = raw.parse().map_err(|_| invalid_id())?;
        if id <= 0 {
            return Err(invalid_id());
        }
        Ok(PathId(id))
    }
}

fn invalid_id() -> ApiError {
    ApiError::Validation(vec!["id must be a positive integer".to_string()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("ada@x.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("two@@x.com"));
        assert!(!is_valid_email("spaces in@x.com"));
        assert!(!is_valid_email("nodomain@"));
    }

    #[test]
    fn normalization_trims_and_lowercases() {
        assert_eq!(normalize_email("  ADA@X.com "), "ada@x.com");
    }

    #[test]
    fn fullname_bounds() {
        let mut errors = Vec::new();
        check_fullname("Al", &mut errors);
        assert_eq!(errors.len(), 1);

        errors.clear();
        check_fullname("Ada Lovelace", &mut errors);
        assert!(errors.is_empty());

        errors.clear();
        check_fullname(&"x".repeat(101), &mut errors);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn password_bounds() {
        let mut errors = Vec::new();
        check_password("abc", &mut errors);
        assert_eq!(errors.len(), 1);

        errors.clear();
        check_password("secret1", &mut errors);
        assert!(errors.is_empty());

        errors.clear();
        check_password(&"p".repeat(200), &mut errors);
        assert_eq!(errors.len(), 1);
    }
}
