//! Route definition for quiz play.

use axum::routing::post;
use axum::Router;

use crate::handlers::quiz;
use crate::state::AppState;

/// ```text
/// POST /quizzes -> next_question
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/quizzes", post(quiz::next_question))
}
