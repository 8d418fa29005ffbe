//! Page-loop termination logic for counted pagination.
//!
//! The listing API pages by `page`/`limit` query parameters rather than
//! cursors, so "last page" has to be inferred from the page contents: an
//! empty page means we ran past the end, and a short page (fewer records
//! than requested) means this page is the end.

/// Outcome of inspecting one fetched page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    /// No records: stop without keeping anything from this page.
    Empty,
    /// Fewer records than the requested limit: keep them, then stop.
    LastPage,
    /// A full page: keep the records and fetch the next page.
    Full,
}

/// Classifies a normalized page by its record count against the requested
/// per-page limit.
#[must_use]
pub fn classify_page(record_count: usize, limit: u32) -> PageStatus {
    if record_count == 0 {
        PageStatus::Empty
    } else if record_count < limit as usize {
        PageStatus::LastPage
    } else {
        PageStatus::Full
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_records_is_empty() {
        assert_eq!(classify_page(0, 100), PageStatus::Empty);
    }

    #[test]
    fn short_page_is_last() {
        assert_eq!(classify_page(40, 100), PageStatus::LastPage);
        assert_eq!(classify_page(99, 100), PageStatus::LastPage);
    }

    #[test]
    fn exact_limit_is_full() {
        assert_eq!(classify_page(100, 100), PageStatus::Full);
    }

    #[test]
    fn over_delivery_is_full() {
        // A server returning more than asked still signals "keep going".
        assert_eq!(classify_page(101, 100), PageStatus::Full);
    }

    #[test]
    fn limit_one_single_record_is_full() {
        assert_eq!(classify_page(1, 1), PageStatus::Full);
    }
}
