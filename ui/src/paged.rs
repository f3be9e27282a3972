//! List-query controller shared by the member and visitor listings.
//!
//! Each list view owns one [`PagedQuery`]: page index, search term, and the
//! last completed result (rows + exact total in a single slot, replaced
//! atomically). The controller re-fetches whenever the page or the search term
//! changes. Concurrent re-fetches are not sequenced by the network, so every
//! fetch takes a token from [`StaleGuard`]; a completion whose token has been
//! superseded is discarded instead of overwriting newer data.

use std::future::Future;

use api::{query, Page};
use dioxus::prelude::*;

/// Monotonic token source letting a controller discard responses that were
/// superseded by a newer fetch.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StaleGuard {
    latest: u64,
}

impl StaleGuard {
    /// Start a new fetch, invalidating every earlier token.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether `token` still identifies the newest fetch.
    pub fn is_current(&self, token: u64) -> bool {
        self.latest == token
    }
}

/// Paginated, searchable list state. One instance per list view, recreated on
/// every navigation to the view.
pub struct PagedQuery<T: 'static> {
    page: Signal<u32>,
    search: Signal<String>,
    result: Signal<Page<T>>,
    loading: Signal<bool>,
    guard: Signal<StaleGuard>,
}

impl<T> Clone for PagedQuery<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PagedQuery<T> {}

impl<T> PagedQuery<T> {
    pub fn page(&self) -> u32 {
        *self.page.read()
    }

    pub fn search(&self) -> String {
        self.search.read().clone()
    }

    pub fn total(&self) -> i64 {
        self.result.read().total
    }

    pub fn loading(&self) -> bool {
        *self.loading.read()
    }

    pub fn total_pages(&self) -> u32 {
        query::total_pages(self.total())
    }

    pub fn has_prev(&self) -> bool {
        query::has_prev(self.page())
    }

    pub fn has_next(&self) -> bool {
        query::has_next(self.page(), self.total())
    }

    /// Advance one page, clamped at the last page.
    pub fn next_page(&mut self) {
        let next = query::next_page(self.page(), self.total());
        self.page.set(next);
    }

    /// Go back one page, clamped at zero.
    pub fn prev_page(&mut self) {
        let prev = query::prev_page(self.page());
        self.page.set(prev);
    }

    /// Replace the search term, triggering a re-fetch. The page index is kept
    /// as-is; an out-of-range page simply yields an empty page.
    pub fn set_search(&mut self, term: String) {
        self.search.set(term);
    }
}

impl<T: Clone> PagedQuery<T> {
    pub fn rows(&self) -> Vec<T> {
        self.result.read().rows.clone()
    }
}

/// Controller hook: re-fetches whenever the page or the search term changes,
/// replaces rows and total atomically on success, and keeps the previously
/// displayed result on failure (the failure is logged and the loading flag
/// cleared).
pub fn use_paged_query<T, F, Fut>(fetch: F) -> PagedQuery<T>
where
    T: Clone + 'static,
    F: Fn(u32, String) -> Fut + Copy + 'static,
    Fut: Future<Output = Result<Page<T>, ServerFnError>> + 'static,
{
    let page = use_signal(|| 0u32);
    let search = use_signal(String::new);
    let mut result = use_signal(Page::<T>::default);
    let mut loading = use_signal(|| true);
    let mut guard = use_signal(StaleGuard::default);

    use_effect(move || {
        let page = *page.read();
        let term = search.read().clone();
        let token = guard.write().begin();
        loading.set(true);
        spawn(async move {
            match fetch(page, term).await {
                Ok(fetched) => {
                    if guard.peek().is_current(token) {
                        result.set(fetched);
                        loading.set(false);
                    } else {
                        tracing::debug!("discarding stale list response");
                    }
                }
                Err(e) => {
                    tracing::warn!("list query failed: {e}");
                    if guard.peek().is_current(token) {
                        loading.set(false);
                    }
                }
            }
        });
    });

    PagedQuery {
        page,
        search,
        result,
        loading,
        guard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_fetch_invalidates_older_tokens() {
        let mut guard = StaleGuard::default();
        let first = guard.begin();
        assert!(guard.is_current(first));

        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn tokens_are_never_reused() {
        let mut guard = StaleGuard::default();
        let a = guard.begin();
        let b = guard.begin();
        assert_ne!(a, b);
    }
}
