//! Intents for the countries list.

use crate::store::mvi::Intent;

use super::state::CountryList;

/// Intents that can be dispatched to the countries store.
#[derive(Debug, Clone)]
pub enum CountriesIntent {
    /// A fetch started: sets `loading`, clears `error`.
    FetchRequest,

    /// A fetch completed with the full collection.
    FetchSuccess(CountryList),

    /// A fetch failed with a user-facing message.
    FetchFailure(String),

    /// Replace the language options.
    SetAvailableLanguages(Vec<String>),

    /// Set the search term. Takes effect on the next `ApplyFilters`.
    SetSearchTerm(String),

    /// Set the selected continents. Takes effect on the next `ApplyFilters`.
    SetContinents(Vec<String>),

    /// Set the selected language. Takes effect on the next `ApplyFilters`.
    SetLanguage(String),

    /// Recompute the filtered list from the current filters.
    ApplyFilters,

    /// Drop every filter and show the full list again.
    ClearFilters,

    /// Jump to a 1-based page; out-of-range pages are ignored.
    SetPage(usize),

    NextPage,

    PrevPage,
}

impl Intent for CountriesIntent {}
