use sqlx::PgPool;

use crate::questions::repo_types::{Answer, Question};

impl Question {
    /// Newest first.
    pub async fn list(db: &PgPool) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, title, description, created_by, created_at
            FROM questions
            ORDER BY id DESC
            "#,
        )
        .fetch_all(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Option<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, title, description, created_by, created_at
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn create(
        db: &PgPool,
        title: &str,
        description: &str,
        created_by: i64,
    ) -> Result<Question, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (title, description, created_by)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, created_by, created_at
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(created_by)
        .fetch_one(db)
        .await
    }
}

impl Answer {
    /// Oldest first, so a thread reads top to bottom.
    pub async fn list_for_question(
        db: &PgPool,
        question_id: i64,
    ) -> Result<Vec<Answer>, sqlx::Error> {
        sqlx::query_as::<_, Answer>(
            r#"
            SELECT id, answer, created_by, created_at
            FROM answers
            WHERE question_id = $1
            ORDER BY id
            "#,
        )
        .bind(question_id)
        .fetch_all(db)
        .await
    }

    /// Inserting against a missing question trips the foreign key (23503).
    pub async fn create(
        db: &PgPool,
        question_id: i64,
        answer: &str,
        created_by: i64,
    ) -> Result<Answer, sqlx::Error> {
        sqlx::query_as::<_, Answer>(
            r#"
            INSERT INTO answers (question_id, answer, created_by)
            VALUES ($1, $2, $3)
            RETURNING id, answer, created_by, created_at
            "#,
        )
        .bind(question_id)
        .bind(answer)
        .bind(created_by)
        .fetch_one(db)
        .await
    }
}
