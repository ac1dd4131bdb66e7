//! Handler for quiz play.

use axum::extract::State;
use axum::response::IntoResponse;
use trivia_core::error::CoreError;
use trivia_core::quiz;
use trivia_db::models::question::QuizRequest;
use trivia_db::repositories::{CategoryRepo, QuestionRepo};

use crate::error::AppResult;
use crate::extract::Json;
use crate::response::QuizResponse;
use crate::state::AppState;

/// POST /quizzes
///
/// Draws one random question from the chosen category (id 0 means all
/// categories), excluding the ids the client has already been served.
/// An exhausted pool is a normal 200 with `question: null`; a missing
/// request field is a 422.
pub async fn next_question(
    State(state): State<AppState>,
    Json(input): Json<QuizRequest>,
) -> AppResult<impl IntoResponse> {
    let previous = input
        .previous_questions
        .ok_or_else(|| CoreError::Unprocessable("previous_questions is required".into()))?;
    let quiz_category = input
        .quiz_category
        .ok_or_else(|| CoreError::Unprocessable("quiz_category is required".into()))?;

    let category = match quiz_category.id {
        0 => None,
        id => {
            if CategoryRepo::find_by_id(&state.pool, id).await?.is_none() {
                return Err(
                    CoreError::Unprocessable("quiz_category does not exist".into()).into(),
                );
            }
            Some(id)
        }
    };

    let candidates = QuestionRepo::list_candidates(&state.pool, category, &previous).await?;
    let question = quiz::draw(candidates, &mut rand::rng());

    tracing::debug!(
        category = ?category,
        excluded = previous.len(),
        drawn = question.as_ref().map(|q| q.id),
        "quiz question drawn"
    );

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
