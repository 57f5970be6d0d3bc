//! Page windows over ranked results.

/// Results per page when none is requested.
pub const DEFAULT_PER_PAGE: u32 = 12;
/// Largest page size a caller may request.
pub const MAX_PER_PAGE: u32 = 50;

/// A clamped, one-based page request.
///
/// # Examples
/// ```
/// use trainer_search_cli::PageRequest;
///
/// let request = PageRequest::new(Some(0), Some(500));
/// assert_eq!(request.page(), 1);
/// assert_eq!(request.per_page(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Clamp `page` to at least one and `per_page` to `1..=50`.
    #[must_use]
    pub fn new(page: Option<u32>, per_page: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            per_page: per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE),
        }
    }

    /// One-based page number.
    #[must_use]
    pub const fn page(self) -> u32 {
        self.page
    }

    /// Entries per page.
    #[must_use]
    pub const fn per_page(self) -> u32 {
        self.per_page
    }

    /// Select this page's window of `items`, empty past the end.
    #[must_use]
    pub fn slice<T>(self, items: &[T]) -> &[T] {
        let per_page = to_usize(self.per_page);
        let start = to_usize(self.page.saturating_sub(1))
            .saturating_mul(per_page)
            .min(items.len());
        let end = start.saturating_add(per_page).min(items.len());
        items.get(start..end).unwrap_or_default()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

fn to_usize(value: u32) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, None, 1, 12)]
    #[case(Some(0), Some(0), 1, 1)]
    #[case(Some(3), Some(51), 3, 50)]
    #[case(Some(2), Some(5), 2, 5)]
    fn clamps_requests(
        #[case] page: Option<u32>,
        #[case] per_page: Option<u32>,
        #[case] expected_page: u32,
        #[case] expected_per_page: u32,
    ) {
        let request = PageRequest::new(page, per_page);
        assert_eq!(request.page(), expected_page);
        assert_eq!(request.per_page(), expected_per_page);
    }

    #[rstest]
    #[case(1, 2, &[1, 2])]
    #[case(2, 2, &[3, 4])]
    #[case(3, 2, &[5])]
    #[case(4, 2, &[])]
    #[case(u32::MAX, 50, &[])]
    fn slices_windows(#[case] page: u32, #[case] per_page: u32, #[case] expected: &[i32]) {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(PageRequest::new(Some(page), Some(per_page)).slice(&items), expected);
    }
}
