use sqlx::FromRow;
use time::OffsetDateTime;

use crate::auth::claims::Role;

/// User record in the database. Deliberately not serializable: responses go
/// through `dto::UserResponse`, which never carries the digest.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub fullname: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: OffsetDateTime,
}
