//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameter for `GET /questions` (`?page=N`, 1-based).
///
/// Defaults to page 1 when absent. A non-numeric value is rejected as a
/// bad request by the extractor.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}
