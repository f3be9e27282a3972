//! Pagination and name-search primitives shared by the server functions and the
//! list views.
//!
//! Every listing in the app uses the same contract: fixed pages of [`PAGE_SIZE`]
//! rows ordered by name ascending, an exact total count scoped by the same
//! predicate as the page itself, and an optional case-insensitive substring
//! filter on the name column. The math lives here so the SQL side (`LIMIT` /
//! `OFFSET`) and the UI side (page-count display, prev/next clamping) can never
//! disagree.

use serde::{Deserialize, Serialize};

/// Rows per page for every listing.
pub const PAGE_SIZE: u32 = 10;

/// One page of results plus the exact total count for the same predicate.
///
/// Rows and total always come from the same completed query pair and are
/// replaced together, so the page-count display and the visible rows can never
/// disagree mid-render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub total: i64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            total: 0,
        }
    }
}

/// First row index of a page (the SQL `OFFSET`).
pub fn offset(page: u32) -> i64 {
    i64::from(page) * i64::from(PAGE_SIZE)
}

/// Number of pages needed for `total` rows.
pub fn total_pages(total: i64) -> u32 {
    if total <= 0 {
        return 0;
    }
    ((total + i64::from(PAGE_SIZE) - 1) / i64::from(PAGE_SIZE)) as u32
}

/// Whether a page after `page` exists for `total` rows.
pub fn has_next(page: u32, total: i64) -> bool {
    i64::from(page + 1) * i64::from(PAGE_SIZE) < total
}

/// Whether a page before `page` exists.
pub fn has_prev(page: u32) -> bool {
    page > 0
}

/// Next page index, clamped so it never runs past the last page.
pub fn next_page(page: u32, total: i64) -> u32 {
    if has_next(page, total) {
        page + 1
    } else {
        page
    }
}

/// Previous page index, clamped at zero.
pub fn prev_page(page: u32) -> u32 {
    page.saturating_sub(1)
}

/// Build the `ILIKE` pattern for a name search, or `None` when the term is
/// blank (a blank term means "no filter", never a zero-result filter).
///
/// `%`, `_` and `\` in the term are escaped so the search always means
/// "contains this text", not a user-supplied wildcard expression.
pub fn ilike_pattern(term: &str) -> Option<String> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    let mut escaped = String::with_capacity(term.len() + 2);
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    Some(format!("%{escaped}%"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_offsets_are_page_size_apart() {
        assert_eq!(offset(0), 0);
        assert_eq!(offset(1), 10);
        assert_eq!(offset(7), 70);
    }

    #[test]
    fn twenty_three_rows_make_three_pages() {
        assert_eq!(total_pages(23), 3);
        // Page index 2 holds rows 21..=23.
        assert_eq!(offset(2), 20);
        assert!(has_prev(2));
        assert!(!has_next(2, 23));
    }

    #[test]
    fn total_pages_edge_counts() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(-5), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
    }

    #[test]
    fn next_is_disabled_once_past_the_total() {
        // p * PAGE_SIZE >= total means there is nothing after page p.
        assert!(!has_next(0, 10));
        assert!(has_next(0, 11));
        assert!(!has_next(1, 20));
        assert!(!has_next(3, 23));
    }

    #[test]
    fn navigation_is_clamped() {
        assert_eq!(prev_page(0), 0);
        assert_eq!(prev_page(3), 2);
        assert_eq!(next_page(2, 23), 2);
        assert_eq!(next_page(1, 23), 2);
    }

    #[test]
    fn blank_search_means_no_filter() {
        assert_eq!(ilike_pattern(""), None);
        assert_eq!(ilike_pattern("   "), None);
    }

    #[test]
    fn search_terms_become_substring_patterns() {
        assert_eq!(ilike_pattern("maria"), Some("%maria%".to_string()));
        assert_eq!(ilike_pattern(" João "), Some("%João%".to_string()));
    }

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(ilike_pattern("100%"), Some("%100\\%%".to_string()));
        assert_eq!(ilike_pattern("a_b"), Some("%a\\_b%".to_string()));
        assert_eq!(ilike_pattern("a\\b"), Some("%a\\\\b%".to_string()));
    }
}
