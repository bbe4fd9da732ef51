//! Explorer session: the glue a front end talks to.
//!
//! Wraps the countries store with the fetch flow and a debounced search
//! box. Filter setters commit in two phases (set, then apply); the search
//! term only reaches the store once typing has paused.

pub mod detail;

use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::api::CountryRepository;
use crate::debounce::Debouncer;
use crate::flow::{FetchCountriesFlow, FetchOutcome};
use crate::store::countries::{
    CountriesFilters, CountryList, PaginatedSelector, Pagination,
};
use crate::store::{CountriesIntent, CountriesStore};

/// Everything a list screen renders, read in one go.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerView {
    /// Countries on the current page.
    pub countries: CountryList,
    /// Countries matching the filters, across all pages.
    pub total_countries: usize,
    /// Active filters, with the search term as typed (not yet debounced).
    pub filters: CountriesFilters,
    pub available_languages: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub pagination: Pagination,
}

pub struct CountryExplorer<R> {
    store: CountriesStore,
    flow: FetchCountriesFlow<R>,
    search: Debouncer<String>,
    typed_search: Mutex<String>,
    pages: PaginatedSelector,
    search_listener: JoinHandle<()>,
}

impl<R: CountryRepository + 'static> CountryExplorer<R> {
    /// Must be called from within a tokio runtime.
    pub fn new(flow: FetchCountriesFlow<R>, search_delay: Duration) -> Self {
        let store = flow.store().clone();
        let search = Debouncer::new(String::new(), search_delay);

        let mut committed = search.subscribe();
        let listener_store = store.clone();
        let search_listener = tokio::spawn(async move {
            while committed.changed().await.is_ok() {
                let term = committed.borrow_and_update().clone();
                tracing::debug!(term = %term, "Applying debounced search");
                listener_store.dispatch(CountriesIntent::SetSearchTerm(term));
                listener_store.dispatch(CountriesIntent::ApplyFilters);
            }
        });

        Self {
            store,
            flow,
            search,
            typed_search: Mutex::new(String::new()),
            pages: PaginatedSelector::new(),
            search_listener,
        }
    }

    pub fn store(&self) -> &CountriesStore {
        &self.store
    }

    /// Fetch the country list, superseding any fetch in flight.
    pub fn load(&self) -> JoinHandle<FetchOutcome> {
        self.flow.request()
    }

    /// Record a keystroke; the store sees it after the debounce delay.
    pub fn search(&self, term: impl Into<String>) {
        let term = term.into();
        *self.typed_search.lock() = term.clone();
        self.search.set(term);
    }

    pub fn set_continents(&self, continents: Vec<String>) {
        self.store.dispatch(CountriesIntent::SetContinents(continents));
        self.store.dispatch(CountriesIntent::ApplyFilters);
    }

    pub fn set_language(&self, language: impl Into<String>) {
        self.store.dispatch(CountriesIntent::SetLanguage(language.into()));
        self.store.dispatch(CountriesIntent::ApplyFilters);
    }

    /// Reset every filter, including the search box.
    pub fn clear_filters(&self) {
        self.typed_search.lock().clear();
        // Commit the empty term now so retyping the old one counts as a change.
        self.search.reset(String::new());
        self.store.dispatch(CountriesIntent::ClearFilters);
        self.store.dispatch(CountriesIntent::ApplyFilters);
    }

    pub fn go_to_page(&self, page: usize) {
        self.store.dispatch(CountriesIntent::SetPage(page));
    }

    pub fn next_page(&self) {
        self.store.dispatch(CountriesIntent::NextPage);
    }

    pub fn prev_page(&self) {
        self.store.dispatch(CountriesIntent::PrevPage);
    }

    pub fn view(&self) -> ExplorerView {
        let state = self.store.state();
        let mut filters = state.filters.clone();
        filters.search_term = self.typed_search.lock().clone();

        ExplorerView {
            countries: self.pages.select(&state),
            total_countries: state.filtered_items.len(),
            filters,
            available_languages: state.available_languages.clone(),
            loading: state.loading,
            error: state.error.clone(),
            pagination: state.pagination,
        }
    }
}

impl<R> Drop for CountryExplorer<R> {
    fn drop(&mut self) {
        self.search_listener.abort();
    }
}
