//! Repository for the `categories` table.

use sqlx::PgPool;
use trivia_core::types::DbId;

use crate::models::category::Category;

/// Column list for categories queries.
const COLUMNS: &str = "id, type";

/// Read-only access to categories. Categories are seed data; nothing in
/// the API mutates them.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories, ordered by id ascending.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id ASC");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Find a category by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
