//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use country_explorer::api::{CountriesApiClient, HttpCountryRepository};
use country_explorer::config::ApiConfig;
use country_explorer::domain::Country;
use country_explorer::store::countries::{country_list, CountryList};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// Minimal domain country; tweak fields on the returned value as needed.
pub fn country(code: &str, name: &str, region: &str, subregion: &str) -> Country {
    Country {
        code: code.to_string(),
        name: name.to_string(),
        official_name: name.to_string(),
        native_name: name.to_string(),
        continent: region.to_string(),
        region: region.to_string(),
        subregion: subregion.to_string(),
        capital: String::new(),
        population: 0,
        area: 0.0,
        languages: Vec::new(),
        currencies: Vec::new(),
        flag: String::new(),
        flag_alt: format!("{} flag", name),
        borders: Vec::new(),
        timezones: Vec::new(),
        landlocked: false,
        independent: true,
    }
}

pub fn brazil() -> Country {
    let mut c = country("BR", "Brasil", "Americas", "South America");
    c.official_name = "República Federativa do Brasil".to_string();
    c.continent = "South America".to_string();
    c.capital = "Brasília".to_string();
    c.population = 212_559_409;
    c.languages = vec!["Portuguese".to_string()];
    c
}

pub fn united_states() -> Country {
    let mut c = country("US", "Estados Unidos", "Americas", "North America");
    c.official_name = "Estados Unidos da América".to_string();
    c.continent = "North America".to_string();
    c.capital = "Washington D.C.".to_string();
    c.population = 329_484_123;
    c.languages = vec!["English".to_string()];
    c
}

pub fn germany() -> Country {
    let mut c = country("DE", "Alemanha", "Europe", "Western Europe");
    c.official_name = "República Federal da Alemanha".to_string();
    c.capital = "Berlim".to_string();
    c.languages = vec!["German".to_string()];
    c
}

/// The three fixtures above, in that order.
pub fn sample_countries() -> CountryList {
    country_list([brazil(), united_states(), germany()])
}

/// `count` synthetic European countries named `Country 01`, `Country 02`, ...
pub fn numbered_countries(count: usize) -> CountryList {
    country_list((1..=count).map(|i| {
        country(
            &format!("C{:02}", i),
            &format!("Country {:02}", i),
            "Europe",
            "Western Europe",
        )
    }))
}

/// Brazil as the countries API returns it, trimmed to the list fields.
pub const BRAZIL_JSON: &str = r#"{
    "name": {"common": "Brazil", "official": "Federative Republic of Brazil"},
    "translations": {"por": {"common": "Brasil", "official": "República Federativa do Brasil"}},
    "cca2": "BR",
    "cca3": "BRA",
    "capital": ["Brasília"],
    "region": "Americas",
    "subregion": "South America",
    "continents": ["South America"],
    "population": 212559409,
    "area": 8515767.0,
    "languages": {"por": "Portuguese"},
    "currencies": {"BRL": {"name": "Brazilian real", "symbol": "R$"}},
    "flags": {"png": "https://flagcdn.com/w320/br.png", "svg": "https://flagcdn.com/br.svg"}
}"#;

pub const USA_JSON: &str = r#"{
    "name": {"common": "United States", "official": "United States of America"},
    "translations": {"por": {"common": "Estados Unidos", "official": "Estados Unidos da América"}},
    "cca2": "US",
    "capital": ["Washington D.C."],
    "region": "Americas",
    "subregion": "North America",
    "continents": ["North America"],
    "population": 329484123,
    "languages": {"eng": "English"}
}"#;

pub const SWITZERLAND_JSON: &str = r#"{
    "name": {"common": "Switzerland", "official": "Swiss Confederation"},
    "cca2": "CH",
    "region": "Europe",
    "subregion": "Western Europe",
    "continents": ["Europe"],
    "languages": {"fra": "French", "gsw": "Swiss German", "ita": "Italian", "roh": "Romansh"}
}"#;

/// JSON array of the given country bodies.
pub fn json_array(bodies: &[&str]) -> String {
    format!("[{}]", bodies.join(","))
}

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig::with_base_url(base_url)
}

pub fn http_repository(base_url: &str) -> HttpCountryRepository {
    let client = CountriesApiClient::new(&api_config(base_url)).expect("Failed to build client");
    HttpCountryRepository::new(client)
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Let spawned tasks run until they block again.
pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

/// Advance paused time, then let woken tasks run.
pub async fn advance_ms(ms: u64) {
    tokio::time::advance(Duration::from_millis(ms)).await;
    settle().await;
}
