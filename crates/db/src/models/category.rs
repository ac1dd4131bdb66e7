//! Category model.

use serde::Serialize;
use sqlx::FromRow;
use trivia_core::types::DbId;

/// A row from the `categories` table.
///
/// The column and wire field are both named `type`; the Rust field is
/// `kind` to avoid the keyword.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}
