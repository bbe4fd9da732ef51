use serde::{Deserialize, Serialize};

/// Normalized country used by the service and the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code, unique key.
    pub code: String,
    /// Localized common name, falling back to the international one.
    pub name: String,
    /// Localized official name, falling back to the international one.
    pub official_name: String,
    pub native_name: String,
    pub continent: String,
    pub region: String,
    pub subregion: String,
    pub capital: String,
    pub population: u64,
    pub area: f64,
    pub languages: Vec<String>,
    pub currencies: Vec<Currency>,
    /// Flag image URL, vector format preferred.
    pub flag: String,
    pub flag_alt: String,
    pub borders: Vec<String>,
    pub timezones: Vec<String>,
    pub landlocked: bool,
    pub independent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
    pub symbol: String,
}

impl Country {
    /// Whether the country lists `language` among its languages (exact match).
    pub fn speaks(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }
}
