//! Route definitions for question listing, search and mutation.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::question;
use crate::state::AppState;

/// ```text
/// GET    /questions          -> list_questions (paginated)
/// POST   /questions          -> create_question
/// DELETE /questions/{id}     -> delete_question
/// POST   /questions/search   -> search_questions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/questions",
            get(question::list_questions).post(question::create_question),
        )
        .route("/questions/{id}", delete(question::delete_question))
        .route("/questions/search", post(question::search_questions))
}
