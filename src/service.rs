//! Country query service: repository + transformer, with error context.

use std::borrow::Borrow;
use std::collections::BTreeSet;

use thiserror::Error;

use crate::api::{ApiError, CountryRepository};
use crate::domain::{Country, CountryTransformer};

/// Reason used when the underlying failure carried no message.
pub const UNKNOWN_REASON: &str = "Unknown error";

/// Errors surfaced by [`CountryService`].
///
/// Each variant prefixes the failed operation and keeps the repository error
/// as its source.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Failed to fetch countries: {reason}")]
    FetchAll {
        reason: String,
        #[source]
        source: ApiError,
    },

    #[error("Failed to fetch country {code}: {reason}")]
    FetchByCode {
        code: String,
        reason: String,
        #[source]
        source: ApiError,
    },
}

impl ServiceError {
    /// The repository error this failure wraps.
    pub fn api_error(&self) -> &ApiError {
        match self {
            ServiceError::FetchAll { source, .. } | ServiceError::FetchByCode { source, .. } => {
                source
            }
        }
    }
}

fn reason_of(err: &ApiError) -> String {
    err.reason().unwrap_or_else(|| UNKNOWN_REASON.to_string())
}

pub struct CountryService<R> {
    repository: R,
    transformer: CountryTransformer,
}

impl<R: CountryRepository> CountryService<R> {
    pub fn new(repository: R) -> Self {
        Self::with_transformer(repository, CountryTransformer::default())
    }

    pub fn with_transformer(repository: R, transformer: CountryTransformer) -> Self {
        Self {
            repository,
            transformer,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub async fn get_all_countries(&self) -> Result<Vec<Country>, ServiceError> {
        match self.repository.fetch_all().await {
            Ok(raw) => Ok(self.transformer.to_domain_list(&raw)),
            Err(source) => {
                tracing::warn!(error = %source, "Fetching all countries failed");
                Err(ServiceError::FetchAll {
                    reason: reason_of(&source),
                    source,
                })
            }
        }
    }

    pub async fn get_country_by_code(&self, code: &str) -> Result<Country, ServiceError> {
        match self.repository.fetch_by_code(code).await {
            Ok(raw) => Ok(self.transformer.to_domain(&raw)),
            Err(source) => {
                tracing::warn!(code, error = %source, "Fetching country failed");
                Err(ServiceError::FetchByCode {
                    code: code.to_string(),
                    reason: reason_of(&source),
                    source,
                })
            }
        }
    }

    /// Sorted, de-duplicated union of every country's languages.
    pub fn extract_unique_languages<C: Borrow<Country>>(&self, countries: &[C]) -> Vec<String> {
        unique_languages(countries)
    }
}

/// Sorted, de-duplicated union of every country's languages.
pub fn unique_languages<C: Borrow<Country>>(countries: &[C]) -> Vec<String> {
    countries
        .iter()
        .flat_map(|c| c.borrow().languages.iter().cloned())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}
