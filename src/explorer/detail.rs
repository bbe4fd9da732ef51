//! Single-country detail loading.

use crate::api::CountryRepository;
use crate::domain::Country;
use crate::service::CountryService;

/// Message shown when a detail lookup fails, whatever the cause.
pub const DETAIL_ERROR: &str = "Could not load country information";

/// State of a detail screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    pub country: Option<Country>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for DetailState {
    /// A detail screen starts out loading.
    fn default() -> Self {
        Self {
            country: None,
            loading: true,
            error: None,
        }
    }
}

/// Look up `code` and return the finished detail state.
///
/// An empty code fetches nothing and leaves the initial state as is.
pub async fn load_country_detail<R: CountryRepository>(
    service: &CountryService<R>,
    code: &str,
) -> DetailState {
    let code = code.trim();
    if code.is_empty() {
        return DetailState::default();
    }

    match service.get_country_by_code(code).await {
        Ok(country) => DetailState {
            country: Some(country),
            loading: false,
            error: None,
        },
        Err(err) => {
            tracing::warn!(code, error = %err, "Country detail unavailable");
            DetailState {
                country: None,
                loading: false,
                error: Some(DETAIL_ERROR.to_string()),
            }
        }
    }
}
