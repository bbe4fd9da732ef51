//! Explorer session: debounced search, filter setters, paging and detail.

mod common;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use common::{advance_ms, settle, BRAZIL_JSON, SWITZERLAND_JSON, USA_JSON};
use country_explorer::api::{ApiError, CountryRepository};
use country_explorer::domain::RawCountry;
use country_explorer::explorer::detail::{load_country_detail, DetailState, DETAIL_ERROR};
use country_explorer::explorer::CountryExplorer;
use country_explorer::flow::{FetchCountriesFlow, FetchOutcome};
use country_explorer::service::CountryService;
use country_explorer::store::CountriesStore;

const SEARCH_DELAY_MS: u64 = 300;

struct StaticRepository {
    countries: Vec<RawCountry>,
}

impl StaticRepository {
    fn from_json(bodies: &[&str]) -> Self {
        Self {
            countries: bodies
                .iter()
                .map(|b| serde_json::from_str(b).expect("fixture should decode"))
                .collect(),
        }
    }

    fn numbered(count: usize) -> Self {
        let bodies: Vec<String> = (1..=count)
            .map(|i| {
                format!(
                    r#"{{"name": {{"common": "Country {i:02}", "official": "Republic {i:02}"}},
                        "cca2": "C{i:02}", "region": "Europe", "continents": ["Europe"]}}"#
                )
            })
            .collect();
        let refs: Vec<&str> = bodies.iter().map(String::as_str).collect();
        Self::from_json(&refs)
    }
}

#[async_trait]
impl CountryRepository for StaticRepository {
    async fn fetch_all(&self) -> Result<Vec<RawCountry>, ApiError> {
        Ok(self.countries.clone())
    }

    async fn fetch_by_code(&self, code: &str) -> Result<RawCountry, ApiError> {
        self.countries
            .iter()
            .find(|c| c.cca2 == code)
            .cloned()
            .ok_or_else(|| ApiError::NotFound {
                code: code.to_string(),
            })
    }
}

fn explorer_with(repository: StaticRepository) -> CountryExplorer<StaticRepository> {
    let service = Arc::new(CountryService::new(repository));
    let flow = FetchCountriesFlow::new(CountriesStore::default(), service);
    CountryExplorer::new(flow, Duration::from_millis(SEARCH_DELAY_MS))
}

async fn loaded_explorer() -> CountryExplorer<StaticRepository> {
    let explorer = explorer_with(StaticRepository::from_json(&[
        BRAZIL_JSON,
        USA_JSON,
        SWITZERLAND_JSON,
    ]));
    assert_eq!(explorer.load().await.unwrap(), FetchOutcome::Committed);
    explorer
}

#[tokio::test(start_paused = true)]
async fn load_fills_the_view() {
    let explorer = loaded_explorer().await;
    let view = explorer.view();

    assert!(!view.loading);
    assert!(view.error.is_none());
    assert_eq!(view.total_countries, 3);
    assert_eq!(view.countries.len(), 3);
    assert_eq!(view.pagination.total_pages, 1);
    assert_eq!(view.available_languages.len(), 6);
}

#[tokio::test(start_paused = true)]
async fn search_applies_after_typing_pauses() {
    let explorer = loaded_explorer().await;

    explorer.search("bra");
    settle().await;

    // The box shows the keystrokes at once; the list waits.
    let view = explorer.view();
    assert_eq!(view.filters.search_term, "bra");
    assert_eq!(view.total_countries, 3);
    assert_eq!(explorer.store().select(|s| s.filters.search_term.clone()), "");

    advance_ms(SEARCH_DELAY_MS).await;

    let view = explorer.view();
    assert_eq!(view.total_countries, 1);
    assert_eq!(view.countries[0].code, "BR");
    assert_eq!(
        explorer.store().select(|s| s.filters.search_term.clone()),
        "bra"
    );
}

#[tokio::test(start_paused = true)]
async fn each_keystroke_restarts_the_delay() {
    let explorer = loaded_explorer().await;

    explorer.search("b");
    advance_ms(200).await;
    explorer.search("br");
    advance_ms(200).await;
    assert_eq!(explorer.view().total_countries, 3);

    advance_ms(100).await;
    assert_eq!(explorer.view().total_countries, 1);
    assert_eq!(
        explorer.store().select(|s| s.filters.search_term.clone()),
        "br"
    );
}

#[tokio::test(start_paused = true)]
async fn continent_and_language_apply_immediately() {
    let explorer = loaded_explorer().await;

    explorer.set_continents(vec!["Europe".to_string()]);
    let view = explorer.view();
    assert_eq!(view.total_countries, 1);
    assert_eq!(view.countries[0].code, "CH");

    explorer.set_continents(vec!["North America".to_string(), "Europe".to_string()]);
    assert_eq!(explorer.view().total_countries, 2);

    explorer.set_language("English");
    let view = explorer.view();
    assert_eq!(view.total_countries, 1);
    assert_eq!(view.countries[0].code, "US");
    assert_eq!(view.filters.language, "English");
}

#[tokio::test(start_paused = true)]
async fn clear_filters_resets_everything() {
    let explorer = loaded_explorer().await;

    explorer.search("bra");
    advance_ms(SEARCH_DELAY_MS).await;
    explorer.set_language("Portuguese");
    assert_eq!(explorer.view().total_countries, 1);

    explorer.clear_filters();
    let view = explorer.view();
    assert!(view.filters.is_empty());
    assert_eq!(view.total_countries, 3);
    assert_eq!(view.pagination.total_pages, 1);

    // The cleared search box must not resurface once the delay passes.
    advance_ms(SEARCH_DELAY_MS).await;
    let view = explorer.view();
    assert!(view.filters.is_empty());
    assert_eq!(view.total_countries, 3);
    assert_eq!(explorer.store().select(|s| s.filters.search_term.clone()), "");
}

#[tokio::test(start_paused = true)]
async fn retyping_the_cleared_term_filters_again() {
    let explorer = loaded_explorer().await;

    explorer.search("bra");
    advance_ms(SEARCH_DELAY_MS).await;
    assert_eq!(explorer.view().total_countries, 1);

    explorer.clear_filters();
    settle().await;
    assert_eq!(explorer.view().total_countries, 3);

    explorer.search("bra");
    advance_ms(SEARCH_DELAY_MS * 2).await;

    let view = explorer.view();
    assert_eq!(view.filters.search_term, "bra");
    assert_eq!(
        explorer.store().select(|s| s.filters.search_term.clone()),
        "bra"
    );
    assert_eq!(view.total_countries, 1);
    assert_eq!(view.countries[0].code, "BR");
}

#[tokio::test(start_paused = true)]
async fn paging_through_twenty_countries() {
    let explorer = explorer_with(StaticRepository::numbered(20));
    explorer.load().await.unwrap();

    let view = explorer.view();
    assert_eq!(view.pagination.total_pages, 3);
    assert_eq!(view.countries.len(), 8);
    assert_eq!(view.countries[0].name, "Country 01");

    explorer.next_page();
    let view = explorer.view();
    assert_eq!(view.pagination.current_page, 2);
    assert_eq!(view.countries[0].name, "Country 09");

    explorer.go_to_page(3);
    let view = explorer.view();
    assert_eq!(view.countries.len(), 4);
    assert_eq!(view.countries[3].name, "Country 20");

    explorer.next_page();
    assert_eq!(explorer.view().pagination.current_page, 3);

    explorer.go_to_page(9);
    assert_eq!(explorer.view().pagination.current_page, 3);

    explorer.prev_page();
    assert_eq!(explorer.view().pagination.current_page, 2);
}

#[tokio::test(start_paused = true)]
async fn new_search_returns_to_first_page() {
    let explorer = explorer_with(StaticRepository::numbered(20));
    explorer.load().await.unwrap();
    explorer.go_to_page(3);

    explorer.search("country 1");
    advance_ms(SEARCH_DELAY_MS).await;

    let view = explorer.view();
    assert_eq!(view.total_countries, 10);
    assert_eq!(view.pagination.current_page, 1);
    assert_eq!(view.pagination.total_pages, 2);
}

#[tokio::test(start_paused = true)]
async fn unchanged_state_reuses_the_page() {
    let explorer = loaded_explorer().await;

    let first = explorer.view().countries;
    let second = explorer.view().countries;
    assert!(Arc::ptr_eq(&first, &second));

    explorer.set_continents(vec!["Europe".to_string()]);
    let third = explorer.view().countries;
    assert!(!Arc::ptr_eq(&first, &third));
}

#[tokio::test(start_paused = true)]
async fn dropping_the_explorer_cancels_pending_search() {
    let explorer = loaded_explorer().await;
    let store = explorer.store().clone();

    explorer.search("bra");
    settle().await;
    drop(explorer);

    advance_ms(SEARCH_DELAY_MS * 2).await;
    let state = store.state();
    assert_eq!(state.filters.search_term, "");
    assert_eq!(state.filtered_items.len(), 3);
}

#[tokio::test]
async fn detail_loads_localized_country() {
    let service = CountryService::new(StaticRepository::from_json(&[BRAZIL_JSON, USA_JSON]));

    let detail = load_country_detail(&service, "BR").await;
    assert!(!detail.loading);
    assert!(detail.error.is_none());

    let country = detail.country.expect("country");
    assert_eq!(country.name, "Brasil");
    assert_eq!(country.area, 8_515_767.0);
    assert_eq!(country.currencies[0].symbol, "R$");
}

#[tokio::test]
async fn detail_failure_uses_fixed_message() {
    let service = CountryService::new(StaticRepository::from_json(&[BRAZIL_JSON]));

    let detail = load_country_detail(&service, "XX").await;
    assert!(!detail.loading);
    assert!(detail.country.is_none());
    assert_eq!(detail.error.as_deref(), Some(DETAIL_ERROR));
}

#[tokio::test]
async fn detail_with_empty_code_stays_initial() {
    let service = CountryService::new(StaticRepository::from_json(&[BRAZIL_JSON]));

    let detail = load_country_detail(&service, "").await;
    assert_eq!(detail, DetailState::default());
    assert!(detail.loading);
}
