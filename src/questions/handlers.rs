use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{info, instrument};

use crate::auth::extractors::AuthUser;
use crate::error::{is_foreign_key_violation, ApiError};
use crate::questions::dto::{CreateAnswerRequest, CreateQuestionRequest, QuestionWithAnswers};
use crate::questions::repo_types::{Answer, Question};
use crate::state::AppState;
use crate::validation::PathId;

pub fn question_routes() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/:id", get(get_question))
        .route(
            "/questions/:id/answers",
            get(list_answers).post(create_answer),
        )
}

#[instrument(skip(state))]
pub async fn list_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Question>>, ApiError> {
    let questions = Question::list(&state.db).await?;
    Ok(Json(questions))
}

#[instrument(skip(state))]
pub async fn get_question(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Json<QuestionWithAnswers>, ApiError> {
    let question = Question::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("question"))?;
    let answers = Answer::list_for_question(&state.db, id).await?;
    Ok(Json(QuestionWithAnswers { question, answers }))
}

#[instrument(skip(state, payload))]
pub async fn create_question(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<CreateQuestionRequest>,
) -> Result<(StatusCode, Json<Question>), ApiError> {
    let (title, description) = payload.validate()?;
    let question = Question::create(&state.db, &title, &description, claims.sub).await?;
    info!(question_id = question.id, user_id = claims.sub, "question created");
    Ok((StatusCode::CREATED, Json(question)))
}

/// Listing answers for a question nobody asked yields an empty list, not a
/// 404.
#[instrument(skip(state))]
pub async fn list_answers(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Json<Vec<Answer>>, ApiError> {
    let answers = Answer::list_for_question(&state.db, id).await?;
    Ok(Json(answers))
}

#[instrument(skip(state, payload))]
pub async fn create_answer(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    PathId(id): PathId,
    Json(payload): Json<CreateAnswerRequest>,
) -> Result<(StatusCode, Json<Answer>), ApiError> {
    let text = payload.validate()?;

    let answer = Answer::create(&state.db, id, &text, claims.sub)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                ApiError::NotFound("question")
            } else {
                ApiError::from(e)
            }
        })?;

    info!(answer_id = answer.id, question_id = id, user_id = claims.sub, "answer created");
    Ok((StatusCode::CREATED, Json(answer)))
}
