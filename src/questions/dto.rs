use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::questions::repo_types::{Answer, Question};

/// Request body for posting a question.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub title: String,
    pub description: Option<String>,
}

impl CreateQuestionRequest {
    /// Returns the cleaned `(title, description)` pair. Description is
    /// optional and stored as an empty string when absent.
    pub fn validate(self) -> Result<(String, String), ApiError> {
        let title = self.title.trim().to_string();
        let description = self.description.unwrap_or_default().trim().to_string();

        if title.chars().count() < 3 {
            return Err(ApiError::Validation(vec![
                "title must be at least 3 characters".to_string(),
            ]));
        }

        Ok((title, description))
    }
}

/// Request body for posting an answer.
#[derive(Debug, Deserialize)]
pub struct CreateAnswerRequest {
    pub answer: String,
}

impl CreateAnswerRequest {
    pub fn validate(self) -> Result<String, ApiError> {
        let answer = self.answer.trim().to_string();
        if answer.is_empty() {
            return Err(ApiError::Validation(vec![
                "answer must not be empty".to_string(),
            ]));
        }
        Ok(answer)
    }
}

/// A question together with its answer thread.
#[derive(Debug, Serialize)]
pub struct QuestionWithAnswers {
    #[serde(flatten)]
    pub question: Question,
    pub answers: Vec<Answer>,
}
