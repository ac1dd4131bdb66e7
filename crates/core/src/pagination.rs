//! Pagination rules for the question collection.
//!
//! Pages are fixed-size windows over the questions ordered by ascending id.
//! A page that falls outside the collection is reported by the caller as
//! "resource not found" rather than an empty 200.

/// Fixed number of questions per page.
pub const QUESTIONS_PER_PAGE: i64 = 10;

/// Convert a 1-based page number into a row offset.
///
/// Returns `None` for `page <= 0`; those land outside the collection and
/// are treated the same as a page past the end.
pub fn page_offset(page: i64) -> Option<i64> {
    if page < 1 {
        return None;
    }
    Some((page - 1) * QUESTIONS_PER_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_starts_at_zero() {
        assert_eq!(page_offset(1), Some(0));
    }

    #[test]
    fn later_pages_step_by_page_size() {
        assert_eq!(page_offset(2), Some(10));
        assert_eq!(page_offset(7), Some(60));
    }

    #[test]
    fn zero_page_is_out_of_range() {
        assert_eq!(page_offset(0), None);
    }

    #[test]
    fn negative_page_is_out_of_range() {
        assert_eq!(page_offset(-3), None);
    }
}
