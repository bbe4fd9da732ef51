//! State for the countries list.

use std::sync::Arc;

use crate::domain::Country;
use crate::store::mvi::StoreState;

/// Countries shown per page.
pub const ITEMS_PER_PAGE: usize = 8;

/// Shared, immutable list of countries.
///
/// Entries are reference-counted so the filtered list holds the very same
/// entries as the full list.
pub type CountryList = Arc<[Arc<Country>]>;

/// Build a [`CountryList`] from owned countries.
pub fn country_list(countries: impl IntoIterator<Item = Country>) -> CountryList {
    countries.into_iter().map(Arc::new).collect()
}

/// Current filter criteria. Empty values mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountriesFilters {
    pub search_term: String,
    pub continents: Vec<String>,
    pub language: String,
}

impl CountriesFilters {
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.continents.is_empty() && self.language.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based.
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_pages: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: ITEMS_PER_PAGE,
            total_pages: 0,
        }
    }
}

impl Pagination {
    /// Pages needed for `len` items.
    pub fn pages_for(&self, len: usize) -> usize {
        len.div_ceil(self.items_per_page)
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }
}

/// Everything the countries list view needs.
#[derive(Debug, Clone, PartialEq)]
pub struct CountriesState {
    /// Full collection from the last successful fetch.
    pub items: CountryList,
    /// Subset of `items` matching `filters` as of the last apply.
    pub filtered_items: CountryList,
    pub filters: CountriesFilters,
    pub available_languages: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub pagination: Pagination,
}

impl Default for CountriesState {
    fn default() -> Self {
        Self {
            items: Arc::from(Vec::new()),
            filtered_items: Arc::from(Vec::new()),
            filters: CountriesFilters::default(),
            available_languages: Vec::new(),
            loading: false,
            error: None,
            pagination: Pagination::default(),
        }
    }
}

impl StoreState for CountriesState {}
