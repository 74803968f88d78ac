use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use lazy_static::lazy_static;
use rand::rngs::OsRng;
use tracing::error;

/// Longest plaintext the hasher will accept. Hashing is CPU-bound and runs
/// on the request path, so input size has to stay bounded.
pub const MAX_PASSWORD_BYTES: usize = 128;

lazy_static! {
    /// Digest verified when login finds no account, so the unknown-email
    /// path costs the same as a wrong password.
    pub static ref PHANTOM_HASH: String =
        hash_password("phantom").expect("phantom digest");
}

pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    if plain.len() > MAX_PASSWORD_BYTES {
        anyhow::bail!("password longer than {MAX_PASSWORD_BYTES} bytes");
    }
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

pub fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        error!(error = %e, "argon2 parse hash error");
        anyhow::anyhow!(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}
