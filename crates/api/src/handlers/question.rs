//! Handlers for question listing, search, creation and deletion.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use trivia_core::error::CoreError;
use trivia_core::pagination::{page_offset, QUESTIONS_PER_PAGE};
use trivia_core::types::DbId;
use trivia_db::models::question::{CreateQuestion, SearchQuestions};
use trivia_db::repositories::{CategoryRepo, QuestionRepo};
use trivia_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::{Json, Query};
use crate::query::PageParams;
use crate::response::{
    category_map, CreatedResponse, DeletedResponse, QuestionListResponse, QuestionPageResponse,
};
use crate::state::AppState;

/// GET /questions?page=N
///
/// One fixed-size page of questions ordered by ascending id, with the
/// total count, the category map, and the label of the page's leading
/// category. A page outside the collection is a 404.
pub async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = params.page.unwrap_or(1);
    let offset = page_offset(page).ok_or(CoreError::NoResults("questions page"))?;

    let questions = QuestionRepo::list_page(&state.pool, QUESTIONS_PER_PAGE, offset).await?;

    if questions.is_empty() {
        return Err(CoreError::NoResults("questions page").into());
    }

    let total_questions = QuestionRepo::count(&state.pool).await?;
    let categories = CategoryRepo::list_all(&state.pool).await?;
    let current_category = category_label(&state.pool, questions[0].category).await?;

    Ok(Json(QuestionPageResponse {
        success: true,
        questions,
        total_questions,
        categories: category_map(categories),
        current_category,
    }))
}

/// POST /questions
///
/// Creates a question. Missing or empty fields and a category that does
/// not resolve to an existing row are unprocessable (422).
pub async fn create_question(
    State(state): State<AppState>,
    Json(input): Json<CreateQuestion>,
) -> AppResult<impl IntoResponse> {
    let question = non_empty(input.question, "question")?;
    let answer = non_empty(input.answer, "answer")?;
    let difficulty = input
        .difficulty
        .ok_or_else(|| unprocessable("difficulty is required"))?;
    let category = input
        .category
        .ok_or_else(|| unprocessable("category must reference an existing category"))?;

    if CategoryRepo::find_by_id(&state.pool, category).await?.is_none() {
        return Err(unprocessable("category must reference an existing category"));
    }

    let created = QuestionRepo::create(&state.pool, &question, &answer, category, difficulty).await?;
    let total_questions = QuestionRepo::count(&state.pool).await?;

    tracing::info!(question_id = created.id, category, "question created");

    Ok(Json(CreatedResponse {
        success: true,
        created: created.id,
        total_questions,
    }))
}

/// DELETE /questions/{id}
///
/// Deleting an id that does not exist is a 422, not a 404; the wire
/// contract treats a failed exists-check at mutation time as unprocessable.
pub async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = QuestionRepo::delete(&state.pool, question_id).await?;

    if !deleted {
        return Err(unprocessable("question does not exist"));
    }

    tracing::info!(question_id, "question deleted");

    Ok(Json(DeletedResponse {
        success: true,
        deleted: question_id,
    }))
}

/// POST /questions/search
///
/// Case-insensitive substring search over the question text. Zero matches
/// is a 404; the current category is taken from the first match.
pub async fn search_questions(
    State(state): State<AppState>,
    Json(input): Json<SearchQuestions>,
) -> AppResult<impl IntoResponse> {
    let term = input
        .search_term
        .ok_or_else(|| unprocessable("searchTerm is required"))?;

    let questions = QuestionRepo::search(&state.pool, &term).await?;

    if questions.is_empty() {
        return Err(CoreError::NoResults("matching questions").into());
    }

    let total_questions = questions.len() as i64;
    let current_category = category_label(&state.pool, questions[0].category).await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions,
        total_questions,
        current_category,
    }))
}

/// Label of a category known to exist via the questions FK.
async fn category_label(pool: &DbPool, id: DbId) -> Result<String, AppError> {
    let category = CategoryRepo::find_by_id(pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Category",
            id,
        })?;
    Ok(category.kind)
}

fn non_empty(field: Option<String>, name: &str) -> Result<String, AppError> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(unprocessable(&format!("{name} must not be empty"))),
    }
}

fn unprocessable(message: &str) -> AppError {
    CoreError::Unprocessable(message.to_string()).into()
}
