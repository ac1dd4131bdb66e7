use crate::types::DbId;

/// Domain-level error taxonomy shared by the repository and HTTP layers.
///
/// The HTTP layer maps these onto wire statuses: [`CoreError::NotFound`] and
/// [`CoreError::NoResults`] become 404, [`CoreError::Unprocessable`] becomes
/// 422.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A lookup by id matched no row.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A read that is allowed to be empty-but-isn't came back empty
    /// (page beyond the last question, search with no matches, ...).
    #[error("no results for {0}")]
    NoResults(&'static str),

    /// The request is well-formed but violates a domain invariant.
    #[error("unprocessable: {0}")]
    Unprocessable(String),
}
