use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;

/// Question record. `created_by` is NULL once the author's account has been
/// deleted.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub created_by: Option<i64>,
    pub created_at: OffsetDateTime,
}

/// Answer record, scoped to a question.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Answer {
    pub id: i64,
    pub answer: String,
    pub created_by: Option<i64>,
    pub created_at: OffsetDateTime,
}
