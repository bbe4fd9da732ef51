//! Derived views over [`CountriesState`].
//!
//! Plain selectors borrow from the state. [`PaginatedSelector`] memoizes the
//! current page so repeated renders of an unchanged state reuse one slice.

use std::sync::Arc;

use parking_lot::Mutex;

use super::state::{CountriesFilters, CountriesState, CountryList, Pagination};

pub fn select_filtered_items(state: &CountriesState) -> &CountryList {
    &state.filtered_items
}

pub fn select_pagination(state: &CountriesState) -> Pagination {
    state.pagination
}

pub fn select_filters(state: &CountriesState) -> &CountriesFilters {
    &state.filters
}

pub fn select_available_languages(state: &CountriesState) -> &[String] {
    &state.available_languages
}

pub fn select_loading(state: &CountriesState) -> bool {
    state.loading
}

pub fn select_error(state: &CountriesState) -> Option<&str> {
    state.error.as_deref()
}

pub fn select_total_countries(state: &CountriesState) -> usize {
    state.filtered_items.len()
}

/// Slice of `items` shown on `current_page` (1-based).
///
/// Pages past the end, and page 0, yield an empty list.
pub fn paginate(items: &CountryList, current_page: usize, items_per_page: usize) -> CountryList {
    let Some(start) = current_page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(items_per_page))
    else {
        return Arc::from(Vec::new());
    };
    if start >= items.len() {
        return Arc::from(Vec::new());
    }
    let end = (start + items_per_page).min(items.len());
    items[start..end].iter().cloned().collect()
}

pub fn select_paginated_countries(state: &CountriesState) -> CountryList {
    paginate(
        &state.filtered_items,
        state.pagination.current_page,
        state.pagination.items_per_page,
    )
}

struct PageCache {
    source: CountryList,
    current_page: usize,
    items_per_page: usize,
    page: CountryList,
}

/// Memoized [`select_paginated_countries`].
///
/// Recomputes only when the filtered list (by identity), the page or the page
/// size changed since the previous call.
#[derive(Default)]
pub struct PaginatedSelector {
    cache: Mutex<Option<PageCache>>,
}

impl PaginatedSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&self, state: &CountriesState) -> CountryList {
        let Pagination {
            current_page,
            items_per_page,
            ..
        } = state.pagination;

        let mut cache = self.cache.lock();
        if let Some(hit) = cache.as_ref().filter(|c| {
            Arc::ptr_eq(&c.source, &state.filtered_items)
                && c.current_page == current_page
                && c.items_per_page == items_per_page
        }) {
            return Arc::clone(&hit.page);
        }

        let page = paginate(&state.filtered_items, current_page, items_per_page);
        *cache = Some(PageCache {
            source: Arc::clone(&state.filtered_items),
            current_page,
            items_per_page,
            page: Arc::clone(&page),
        });
        page
    }
}
