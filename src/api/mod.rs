//! Data access for the country API.
//!
//! [`CountriesApiClient`] owns the HTTP details, [`HttpCountryRepository`]
//! knows the endpoints and response shapes, and [`CountryRepository`] is the
//! seam the service layer depends on.

mod client;
mod error;
mod repository;

pub use client::CountriesApiClient;
pub use error::ApiError;
pub use repository::{
    CountryRepository, HttpCountryRepository, OneOrMany, DETAIL_FIELDS, LIST_FIELDS,
};
