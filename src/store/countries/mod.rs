//! Countries list: filters, pagination and fetch status.

pub mod filter;
mod intent;
mod reducer;
pub mod selectors;
mod state;

pub use intent::CountriesIntent;
pub use reducer::CountriesReducer;
pub use selectors::PaginatedSelector;
pub use state::{
    country_list, CountriesFilters, CountriesState, CountryList, Pagination, ITEMS_PER_PAGE,
};

/// Store specialised for the countries list.
pub type CountriesStore = crate::store::Store<CountriesReducer>;
