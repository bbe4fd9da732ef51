//! Reducer for the countries list.

use std::sync::Arc;

use crate::store::mvi::Reducer;

use super::filter::filter_countries;
use super::intent::CountriesIntent;
use super::state::{CountriesFilters, CountriesState};

/// Reducer for countries state transitions.
pub struct CountriesReducer;

impl Reducer for CountriesReducer {
    type State = CountriesState;
    type Intent = CountriesIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CountriesIntent::FetchRequest => {
                state.loading = true;
                state.error = None;
            }

            CountriesIntent::FetchSuccess(countries) => {
                state.pagination.total_pages = state.pagination.pages_for(countries.len());
                state.pagination.current_page = 1;
                state.filtered_items = Arc::clone(&countries);
                state.items = countries;
                state.loading = false;
                state.error = None;
            }

            CountriesIntent::FetchFailure(message) => {
                state.loading = false;
                state.error = Some(message);
            }

            CountriesIntent::SetAvailableLanguages(languages) => {
                state.available_languages = languages;
            }

            CountriesIntent::SetSearchTerm(term) => state.filters.search_term = term,
            CountriesIntent::SetContinents(continents) => state.filters.continents = continents,
            CountriesIntent::SetLanguage(language) => state.filters.language = language,

            CountriesIntent::ApplyFilters => {
                state.filtered_items = filter_countries(&state.items, &state.filters);
                state.pagination.total_pages =
                    state.pagination.pages_for(state.filtered_items.len());
                state.pagination.current_page = 1;
            }

            // Pagination is not recomputed; follow with ApplyFilters for
            // fresh bounds.
            CountriesIntent::ClearFilters => {
                state.filters = CountriesFilters::default();
                state.filtered_items = Arc::clone(&state.items);
            }

            CountriesIntent::SetPage(page) => {
                if page >= 1 && page <= state.pagination.total_pages {
                    state.pagination.current_page = page;
                }
            }

            CountriesIntent::NextPage => {
                if state.pagination.has_next() {
                    state.pagination.current_page += 1;
                }
            }

            CountriesIntent::PrevPage => {
                if state.pagination.has_prev() {
                    state.pagination.current_page -= 1;
                }
            }
        }

        state
    }
}
