//! Route definitions for category reads.

use axum::routing::get;
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// ```text
/// GET /categories                  -> list_categories
/// GET /categories/{id}/questions   -> list_category_questions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(category::list_categories))
        .route(
            "/categories/{id}/questions",
            get(category::list_category_questions),
        )
}
