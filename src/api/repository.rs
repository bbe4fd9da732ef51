//! Country repository: the two reads the app needs from the API.

use async_trait::async_trait;
use serde::Deserialize;

use crate::api::client::CountriesApiClient;
use crate::api::error::ApiError;
use crate::domain::RawCountry;

/// Field projection for the list view.
pub const LIST_FIELDS: &str =
    "name,capital,region,subregion,population,flags,cca2,languages,currencies,continents";

/// Field projection for the detail view (a superset of [`LIST_FIELDS`]).
pub const DETAIL_FIELDS: &str = "name,capital,region,subregion,population,flags,cca2,cca3,languages,currencies,continents,translations,area,borders,timezones,landlocked,independent";

/// Source of raw country records.
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// Every country, with the list projection.
    async fn fetch_all(&self) -> Result<Vec<RawCountry>, ApiError>;

    /// One country by ISO code, with the detail projection.
    async fn fetch_by_code(&self, code: &str) -> Result<RawCountry, ApiError>;
}

/// Response body that is either a single object or an array of them.
///
/// The by-code endpoint returns either shape; both are normalized here so
/// nothing past the repository has to care.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    /// The single object, or the first element of the array.
    pub fn into_first(self) -> Option<T> {
        match self {
            OneOrMany::One(item) => Some(item),
            OneOrMany::Many(items) => items.into_iter().next(),
        }
    }
}

/// ISO codes are ASCII letters and digits; anything else would reshape the URL.
fn is_valid_code(code: &str) -> bool {
    !code.is_empty() && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Repository backed by the HTTP API.
#[derive(Debug, Clone)]
pub struct HttpCountryRepository {
    client: CountriesApiClient,
}

impl HttpCountryRepository {
    pub fn new(client: CountriesApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CountryRepository for HttpCountryRepository {
    async fn fetch_all(&self) -> Result<Vec<RawCountry>, ApiError> {
        let countries: Vec<RawCountry> = self
            .client
            .get(&format!("/all?fields={}", LIST_FIELDS))
            .await?;
        tracing::debug!(count = countries.len(), "Fetched all countries");
        Ok(countries)
    }

    async fn fetch_by_code(&self, code: &str) -> Result<RawCountry, ApiError> {
        if !is_valid_code(code) {
            return Err(ApiError::InvalidCode {
                code: code.to_string(),
            });
        }

        // `null` and `[]` both mean "no such country".
        let response: Option<OneOrMany<RawCountry>> = self
            .client
            .get(&format!("/alpha/{}?fields={}", code, DETAIL_FIELDS))
            .await?;

        response
            .and_then(OneOrMany::into_first)
            .ok_or_else(|| ApiError::NotFound {
                code: code.to_string(),
            })
    }
}
