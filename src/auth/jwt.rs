use std::time::Duration;

use axum::extract::FromRef;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::debug;

use crate::auth::claims::{Claims, Role};
use crate::config::JwtConfig;
use crate::state::AppState;

/// Verification failures, split so logs can tell an expired token from a
/// forged or malformed one. Clients see the same 401 either way.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid token")]
    Invalid,
}

#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    pub ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let JwtConfig {
            secret,
            ttl_minutes,
        } = state.config.jwt.clone();
        Self::new(&secret, Duration::from_secs(ttl_minutes as u64 * 60))
    }
}

impl JwtKeys {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    pub fn sign(&self, user_id: i64, role: Role) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + TimeDuration::seconds(self.ttl.as_secs() as i64);
        let claims = Claims {
            sub: user_id,
            role,
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id, role = ?role, "jwt signed");
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::default();
        validation.leeway = 0;
        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            }
        })?;
        debug!(user_id = data.claims.sub, "jwt verified");
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_keys(secret: &str) -> JwtKeys {
        JwtKeys::new(secret, Duration::from_secs(5 * 60))
    }

    #[test]
    fn sign_and_verify_preserves_subject_and_role() {
        let keys = make_keys("dev-secret");
        let token = keys.sign(17, Role::Admin).expect("sign");
        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.sub, 17);
        assert_eq!(claims.role, Role::Admin);
        assert!(claims.exp > claims.iat);
    }

    #[tokio::test]
    async fn keys_derive_from_app_state() {
        let state = crate::state::AppState::fake();
        let keys = JwtKeys::from_ref(&state);
        let token = keys.sign(3, Role::User).expect("sign");
        assert_eq!(keys.verify(&token).expect("verify").sub, 3);
        assert_eq!(keys.ttl, Duration::from_secs(5 * 60));
    }

    #[test]
    fn verify_rejects_expired_token() {
        let keys = make_keys("dev-secret");
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let claims = Claims {
            sub: 7,
            role: Role::User,
            iat: (now - 7200) as usize,
            exp: (now - 3600) as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"dev-secret"),
        )
        .expect("encode");

        assert_eq!(keys.verify(&token).unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn verify_rejects_other_secret() {
        let token = make_keys("secret-a").sign(1, Role::User).expect("sign");
        assert_eq!(
            make_keys("secret-b").verify(&token).unwrap_err(),
            TokenError::Invalid
        );
    }

    #[test]
    fn verify_rejects_garbage() {
        let keys = make_keys("dev-secret");
        assert_eq!(
            keys.verify("not-even-a-jwt").unwrap_err(),
            TokenError::Invalid
        );
    }

    #[test]
    fn verify_accepts_string_subject() {
        #[derive(serde::Serialize)]
        struct RawClaims<'a> {
            sub: &'a str,
            role: &'a str,
            iat: usize,
            exp: usize,
        }

        let now = OffsetDateTime::now_utc().unix_timestamp() as usize;
        let token = encode(
            &Header::default(),
            &RawClaims {
                sub: "42",
                role: "admin",
                iat: now,
                exp: now + 300,
            },
            &EncodingKey::from_secret(b"dev-secret"),
        )
        .expect("encode");

        let claims = make_keys("dev-secret").verify(&token).expect("verify");
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.role, Role::Admin);
    }
}
