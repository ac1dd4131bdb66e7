//! Question model and request DTOs.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use trivia_core::types::DbId;

/// A row from the `questions` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Question {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub category: DbId,
    pub difficulty: i32,
}

/// DTO for `POST /questions`.
///
/// Every field is optional at the serde level so a missing or unusable
/// field surfaces as a 422 domain error instead of a 400 parse error,
/// matching the observed wire behaviour.
#[derive(Debug, Deserialize)]
pub struct CreateQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient_category_id")]
    pub category: Option<DbId>,
    pub difficulty: Option<i32>,
}

/// DTO for `POST /questions/search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuestions {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// DTO for `POST /quizzes`.
///
/// Both fields are required; the handler rejects a missing one as 422.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<DbId>>,
    pub quiz_category: Option<QuizCategory>,
}

/// The category selector sent by quiz clients. `id == 0` means "all
/// categories". The accompanying `type` label is ignored.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: DbId,
}

/// Accept a category reference as either a JSON number or a numeric
/// string; anything else (notably `""`) becomes `None` and is rejected
/// by the handler as unprocessable.
fn lenient_category_id<'de, D>(deserializer: D) -> Result<Option<DbId>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Id(DbId),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Id(id)) => Some(id),
        Some(Raw::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}
