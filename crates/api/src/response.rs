//! Wire response envelopes.
//!
//! Every success body carries `success: true` plus endpoint-specific
//! fields; every error body is `{success: false, message}`. The structs
//! here are the single source of the wire shapes, instead of ad-hoc JSON
//! maps in handlers.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use serde::Serialize;
use trivia_core::types::DbId;
use trivia_db::models::category::Category;
use trivia_db::models::question::Question;

/// `GET /categories`.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    /// Map of category id to its label, e.g. `{"1": "Science"}`.
    pub categories: BTreeMap<DbId, String>,
}

/// `GET /questions?page=N`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: BTreeMap<DbId, String>,
    pub current_category: String,
}

/// `POST /questions/search` and `GET /categories/{id}/questions`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: String,
}

/// `POST /questions`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedResponse {
    pub success: bool,
    pub created: DbId,
    pub total_questions: i64,
}

/// `DELETE /questions/{id}`.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: DbId,
}

/// `POST /quizzes`. `question` is `null` once the pool is exhausted.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// Error envelope shared by every failure status.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: &'static str,
}

impl ErrorBody {
    /// The uniform wire message for a failure status.
    pub fn for_status(status: StatusCode) -> Self {
        let message = match status {
            StatusCode::BAD_REQUEST => "bad request",
            StatusCode::NOT_FOUND => "resource not found",
            StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
            StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
            _ => "internal server error",
        };
        Self {
            success: false,
            message,
        }
    }
}

/// Collapse a category list into the id-to-label wire map.
pub fn category_map(categories: Vec<Category>) -> BTreeMap<DbId, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
