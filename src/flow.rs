//! Latest-wins orchestration of the "fetch all countries" request.
//!
//! Every [`FetchCountriesFlow::request`] starts a new run and makes all older
//! runs stale. A stale run still finishes its network call, but its result is
//! dropped instead of reaching the store. Requests are not aborted on the
//! wire.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::api::CountryRepository;
use crate::service::CountryService;
use crate::store::countries::country_list;
use crate::store::{CountriesIntent, CountriesStore};

/// Message committed when a run fails without an error value.
pub const UNKNOWN_FAILURE: &str = "Unknown error occurred";

/// How a single run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The run was the latest one and its result reached the store.
    Committed,
    /// A newer request started first; the result was discarded.
    Superseded,
}

/// Drives the countries fetch against a store.
pub struct FetchCountriesFlow<R> {
    store: CountriesStore,
    service: Arc<CountryService<R>>,
    // Held while dispatching so a commit can never interleave with a newer
    // request's FetchRequest.
    generation: Arc<Mutex<u64>>,
}

impl<R> Clone for FetchCountriesFlow<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            service: Arc::clone(&self.service),
            generation: Arc::clone(&self.generation),
        }
    }
}

impl<R: CountryRepository + 'static> FetchCountriesFlow<R> {
    pub fn new(store: CountriesStore, service: Arc<CountryService<R>>) -> Self {
        Self {
            store,
            service,
            generation: Arc::new(Mutex::new(0)),
        }
    }

    pub fn store(&self) -> &CountriesStore {
        &self.store
    }

    pub fn service(&self) -> &Arc<CountryService<R>> {
        &self.service
    }

    /// Start a new fetch, superseding any run still in flight.
    ///
    /// The returned handle resolves once this run has finished, whether or
    /// not it committed. Dropping the handle does not cancel the run.
    pub fn request(&self) -> JoinHandle<FetchOutcome> {
        let generation = {
            let mut current = self.generation.lock();
            *current += 1;
            self.store.dispatch(CountriesIntent::FetchRequest);
            *current
        };
        tracing::debug!(generation, "Countries fetch requested");

        let store = self.store.clone();
        let service = Arc::clone(&self.service);
        let latest = Arc::clone(&self.generation);

        tokio::spawn(async move {
            // A panicking fetch surfaces as a JoinError rather than tearing
            // down this task.
            let fetcher = Arc::clone(&service);
            let result = tokio::spawn(async move { fetcher.get_all_countries().await }).await;

            let current = latest.lock();
            if *current != generation {
                tracing::debug!(
                    generation,
                    latest = *current,
                    "Discarding superseded countries fetch"
                );
                return FetchOutcome::Superseded;
            }

            match result {
                Ok(Ok(countries)) => {
                    let countries = country_list(countries);
                    let languages = service.extract_unique_languages(&countries[..]);
                    tracing::info!(
                        generation,
                        count = countries.len(),
                        languages = languages.len(),
                        "Countries fetch committed"
                    );
                    store.dispatch(CountriesIntent::FetchSuccess(countries));
                    store.dispatch(CountriesIntent::SetAvailableLanguages(languages));
                }
                Ok(Err(err)) => {
                    tracing::warn!(generation, error = %err, "Countries fetch failed");
                    store.dispatch(CountriesIntent::FetchFailure(err.to_string()));
                }
                Err(join_err) => {
                    tracing::error!(generation, error = %join_err, "Countries fetch aborted");
                    store.dispatch(CountriesIntent::FetchFailure(UNKNOWN_FAILURE.to_string()));
                }
            }
            FetchOutcome::Committed
        })
    }
}
