//! Continent labels offered to the user.
//!
//! The source dataset tags every American country with region `Americas`;
//! the three American labels are pseudo-continents derived from `subregion`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::country::Country;

/// Region value under which the dataset groups all American countries.
pub const AMERICAS_REGION: &str = "Americas";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Continent {
    Africa,
    NorthAmerica,
    CentralAmerica,
    SouthAmerica,
    Asia,
    Europe,
    Oceania,
    Antarctic,
}

impl Continent {
    pub const ALL: [Continent; 8] = [
        Continent::Africa,
        Continent::NorthAmerica,
        Continent::CentralAmerica,
        Continent::SouthAmerica,
        Continent::Asia,
        Continent::Europe,
        Continent::Oceania,
        Continent::Antarctic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::NorthAmerica => "North America",
            Continent::CentralAmerica => "Central America",
            Continent::SouthAmerica => "South America",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::Oceania => "Oceania",
            Continent::Antarctic => "Antarctic",
        }
    }

    /// True for the labels derived from the `Americas` region.
    pub fn is_american(self) -> bool {
        matches!(
            self,
            Continent::NorthAmerica | Continent::CentralAmerica | Continent::SouthAmerica
        )
    }

    /// Whether `country` belongs to this continent.
    ///
    /// American countries only ever match the three American labels, decided
    /// by their lower-cased subregion. Everyone else matches when either the
    /// `continent` or the `region` field carries the label, since the dataset
    /// is not consistent about which of the two it fills.
    pub fn matches(self, country: &Country) -> bool {
        if country.region == AMERICAS_REGION {
            let subregion = country.subregion.to_lowercase();
            return match self {
                Continent::NorthAmerica => subregion == "north america",
                Continent::CentralAmerica => {
                    subregion.contains("central") || subregion.contains("caribbean")
                }
                Continent::SouthAmerica => subregion.contains("south"),
                _ => false,
            };
        }

        if self.is_american() {
            return false;
        }

        let label = self.as_str();
        country.continent == label || country.region == label
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown continent '{0}'")]
pub struct UnknownContinent(pub String);

impl FromStr for Continent {
    type Err = UnknownContinent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Continent::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownContinent(s.to_string()))
    }
}

/// Matches a free-form selection label against a country.
///
/// Labels outside the recognized set never match.
pub fn matches_selection(country: &Country, selected: &str) -> bool {
    selected
        .parse::<Continent>()
        .map(|continent| continent.matches(country))
        .unwrap_or(false)
}

/// Label to show for a country's continent.
///
/// American subregions map onto the pseudo-continents; anything else shows
/// the continent string unchanged. Hints are ignored outside the Americas so
/// that e.g. "Southern Europe" stays in Europe.
pub fn display_name(continent: &str, subregion: Option<&str>) -> String {
    let american = continent == AMERICAS_REGION
        || continent
            .parse::<Continent>()
            .map(Continent::is_american)
            .unwrap_or(false);

    if let Some(subregion) = subregion.filter(|s| american && !s.is_empty()) {
        let subregion = subregion.to_lowercase();
        if subregion.contains("northern") {
            return Continent::NorthAmerica.to_string();
        }
        if subregion.contains("central") || subregion.contains("caribbean") {
            return Continent::CentralAmerica.to_string();
        }
        if subregion.contains("south") {
            return Continent::SouthAmerica.to_string();
        }
    }

    continent.to_string()
}
