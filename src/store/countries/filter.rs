//! Filter predicate for the countries list.
//!
//! Dimensions combine with AND; the continent list combines with OR.

use std::sync::Arc;

use crate::domain::{matches_selection, Country};

use super::state::{CountriesFilters, CountryList};

fn matches_search(country: &Country, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }
    let needle = search_term.to_lowercase();
    country.name.to_lowercase().contains(&needle)
        || country.official_name.to_lowercase().contains(&needle)
}

fn matches_continents(country: &Country, continents: &[String]) -> bool {
    continents.is_empty()
        || continents
            .iter()
            .any(|selected| matches_selection(country, selected))
}

fn matches_language(country: &Country, language: &str) -> bool {
    language.is_empty() || country.speaks(language)
}

/// Whether `country` satisfies every active filter.
pub fn matches_filters(country: &Country, filters: &CountriesFilters) -> bool {
    matches_search(country, &filters.search_term)
        && matches_continents(country, &filters.continents)
        && matches_language(country, &filters.language)
}

/// Entries of `items` that satisfy `filters`, sharing the same allocations.
pub fn filter_countries(items: &CountryList, filters: &CountriesFilters) -> CountryList {
    items
        .iter()
        .filter(|country| matches_filters(country, filters))
        .map(Arc::clone)
        .collect()
}
