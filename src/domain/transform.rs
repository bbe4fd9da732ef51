//! Raw API record to domain [`Country`] mapping.
//!
//! The mapping is total: every missing optional field degrades to an empty
//! string, empty list, zero or `false`.

use super::country::{Country, Currency};
use super::raw::RawCountry;

/// Translation key preferred for display names when none is configured.
pub const DEFAULT_LOCALE: &str = "por";

/// Maps raw records into domain countries using a preferred translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryTransformer {
    locale: String,
}

impl Default for CountryTransformer {
    fn default() -> Self {
        Self::with_locale(DEFAULT_LOCALE)
    }
}

impl CountryTransformer {
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn to_domain(&self, raw: &RawCountry) -> Country {
        let translation = raw.translations.get(&self.locale);
        let name = localized(translation.map(|t| t.common.as_str()), &raw.name.common);
        let official_name = localized(
            translation.map(|t| t.official.as_str()),
            &raw.name.official,
        );

        let languages = raw
            .languages
            .as_ref()
            .map(|langs| langs.values().cloned().collect())
            .unwrap_or_default();

        let currencies = raw
            .currencies
            .as_ref()
            .map(|entries| {
                entries
                    .iter()
                    .map(|(code, currency)| Currency {
                        code: code.to_string(),
                        name: currency.name.clone(),
                        symbol: currency.symbol.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let continent = raw
            .continents
            .as_ref()
            .and_then(|list| first_non_empty(list))
            .unwrap_or(&raw.region)
            .to_string();

        let capital = raw
            .capital
            .as_ref()
            .and_then(|list| first_non_empty(list))
            .cloned()
            .unwrap_or_default();

        let flags = raw.flags.as_ref();
        let flag = flags
            .and_then(|f| non_empty(f.svg.as_deref()).or_else(|| non_empty(f.png.as_deref())))
            .unwrap_or_default()
            .to_string();
        let flag_alt = flags
            .and_then(|f| non_empty(f.alt.as_deref()))
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} flag", name));

        Country {
            code: raw.cca2.clone(),
            name,
            official_name,
            native_name: raw.name.common.clone(),
            continent,
            region: raw.region.clone(),
            subregion: raw.subregion.clone().unwrap_or_default(),
            capital,
            population: raw.population.unwrap_or(0),
            area: raw.area.filter(|a| *a > 0.0).unwrap_or(0.0),
            languages,
            currencies,
            flag,
            flag_alt,
            borders: raw.borders.clone().unwrap_or_default(),
            timezones: raw.timezones.clone().unwrap_or_default(),
            landlocked: raw.landlocked.unwrap_or(false),
            independent: raw.independent.unwrap_or(false),
        }
    }

    pub fn to_domain_list(&self, raws: &[RawCountry]) -> Vec<Country> {
        raws.iter().map(|raw| self.to_domain(raw)).collect()
    }
}

fn localized(translation: Option<&str>, fallback: &str) -> String {
    non_empty(translation).unwrap_or(fallback).to_string()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn first_non_empty(list: &[String]) -> Option<&String> {
    list.first().filter(|v| !v.is_empty())
}
