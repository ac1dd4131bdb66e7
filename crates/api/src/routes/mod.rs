pub mod category;
pub mod health;
pub mod question;
pub mod quiz;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                   list (GET)
/// /categories/{id}/questions    questions in one category (GET)
///
/// /questions                    paginated list (GET), create (POST)
/// /questions/{id}               delete (DELETE)
/// /questions/search             text search (POST)
///
/// /quizzes                      draw next quiz question (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(category::router())
        .merge(question::router())
        .merge(quiz::router())
}
