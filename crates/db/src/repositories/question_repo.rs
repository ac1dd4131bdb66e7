//! Repository for the `questions` table.

use sqlx::PgPool;
use trivia_core::types::DbId;

use crate::models::question::Question;

/// Column list for questions queries.
const COLUMNS: &str = "id, question, answer, category, difficulty";

/// Provides query and CRUD operations for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Fetch one page of questions, ordered by id ascending.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions ORDER BY id ASC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Question>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of questions across all categories.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(pool)
            .await
    }

    /// Find a question by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every question in one category, ordered by id ascending.
    pub async fn list_by_category(
        pool: &PgPool,
        category: DbId,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE category = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Question>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search over the question text, ordered
    /// by id ascending. `%` and `_` in the term are matched literally.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let pattern = format!("%{}%", escape_like(term));
        let query = format!(
            "SELECT {COLUMNS} FROM questions WHERE question ILIKE $1 ORDER BY id ASC"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// Questions still eligible for a quiz: all questions in `category`
    /// (or every category when `None`), minus the already-asked ids.
    pub async fn list_candidates(
        pool: &PgPool,
        category: Option<DbId>,
        exclude: &[DbId],
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions
             WHERE ($1::BIGINT IS NULL OR category = $1)
               AND id <> ALL($2)
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(category)
            .bind(exclude)
            .fetch_all(pool)
            .await
    }

    /// Insert a new question, returning the created row.
    pub async fn create(
        pool: &PgPool,
        question: &str,
        answer: &str,
        category: DbId,
        difficulty: i32,
    ) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (question, answer, category, difficulty)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(question)
            .bind(answer)
            .bind(category)
            .bind(difficulty)
            .fetch_one(pool)
            .await
    }

    /// Delete a question by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Escape LIKE metacharacters so the search term is matched literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_neutralizes_wildcards() {
        assert_eq!(escape_like("50%_\\"), "50\\%\\_\\\\");
        assert_eq!(escape_like("name"), "name");
    }
}
