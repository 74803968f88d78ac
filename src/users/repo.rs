use sqlx::PgPool;

use crate::users::repo_types::User;

impl User {
    /// Find a user by (normalized) email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, fullname, email, password_hash, role, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, fullname, email, password_hash, role, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Create a new user with an already-hashed password. A duplicate email
    /// surfaces as a unique-constraint violation (code 23505).
    pub async fn create(
        db: &PgPool,
        fullname: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (fullname, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, fullname, email, password_hash, role, created_at
            "#,
        )
        .bind(fullname)
        .bind(email)
        .bind(password_hash)
        .fetch_one(db)
        .await
    }

    pub async fn list(db: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, fullname, email, password_hash, role, created_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(db)
        .await
    }

    /// Partial update: absent fields keep their current value. Returns
    /// `None` when no row matches.
    pub async fn update(
        db: &PgPool,
        id: i64,
        fullname: Option<&str>,
        email: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET fullname      = COALESCE($2, fullname),
                email         = COALESCE($3, email),
                password_hash = COALESCE($4, password_hash)
            WHERE id = $1
            RETURNING id, fullname, email, password_hash, role, created_at
            "#,
        )
        .bind(id)
        .bind(fullname)
        .bind(email)
        .bind(password_hash)
        .fetch_optional(db)
        .await
    }

    /// Returns whether a row was deleted.
    pub async fn delete(db: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let deleted: Option<(i64,)> =
            sqlx::query_as(r#"DELETE FROM users WHERE id = $1 RETURNING id"#)
                .bind(id)
                .fetch_optional(db)
                .await?;
        Ok(deleted.is_some())
    }
}
