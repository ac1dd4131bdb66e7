//! Handlers for category reads.
//!
//! Categories are seed data; the API only ever reads them.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use trivia_core::error::CoreError;
use trivia_core::types::DbId;
use trivia_db::repositories::{CategoryRepo, QuestionRepo};

use crate::error::AppResult;
use crate::extract::Json;
use crate::response::{category_map, CategoriesResponse, QuestionListResponse};
use crate::state::AppState;

/// GET /categories
///
/// All categories as an id-to-label map. An empty table is a 404.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list_all(&state.pool).await?;

    if categories.is_empty() {
        return Err(CoreError::NoResults("categories").into());
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

/// GET /categories/{id}/questions
///
/// Every question in one category, ordered by id. A missing category and
/// a category without questions are both 404s.
pub async fn list_category_questions(
    State(state): State<AppState>,
    Path(category_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::find_by_id(&state.pool, category_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        })?;

    let questions = QuestionRepo::list_by_category(&state.pool, category_id).await?;

    if questions.is_empty() {
        return Err(CoreError::NoResults("questions in category").into());
    }

    let total_questions = questions.len() as i64;

    Ok(Json(QuestionListResponse {
        success: true,
        questions,
        total_questions,
        current_category: category.kind,
    }))
}
