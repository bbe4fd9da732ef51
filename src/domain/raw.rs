//! Wire shape of the country-data API.
//!
//! Only `name` is required; everything else degrades to its default so a
//! sparse field projection still decodes.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Country record as returned by the API, before transformation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCountry {
    pub name: RawName,
    #[serde(default)]
    pub translations: OrderedEntries<RawName>,
    #[serde(default)]
    pub cca2: String,
    #[serde(default)]
    pub cca3: Option<String>,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub languages: Option<OrderedEntries<String>>,
    #[serde(default)]
    pub currencies: Option<OrderedEntries<RawCurrency>>,
    #[serde(default)]
    pub flags: Option<RawFlags>,
    #[serde(default)]
    pub borders: Option<Vec<String>>,
    #[serde(default)]
    pub timezones: Option<Vec<String>>,
    #[serde(default)]
    pub continents: Option<Vec<String>>,
    #[serde(default)]
    pub landlocked: Option<bool>,
    #[serde(default)]
    pub independent: Option<bool>,
}

/// Common/official name pair, used both for the name and for translations.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawName {
    #[serde(default)]
    pub common: String,
    #[serde(default)]
    pub official: String,
}

impl RawName {
    /// Builds a name pair, mostly useful for fixtures.
    pub fn new(common: impl Into<String>, official: impl Into<String>) -> Self {
        Self {
            common: common.into(),
            official: official.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawCurrency {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawFlags {
    #[serde(default)]
    pub png: Option<String>,
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

/// JSON object decoded as key/value pairs in document order.
///
/// Language and currency lists are built from object iteration order, which
/// a hash map would lose.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedEntries<V>(pub Vec<(String, V)>);

impl<V> Default for OrderedEntries<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> OrderedEntries<V> {
    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.0.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V> FromIterator<(String, V)> for OrderedEntries<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedEntries<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = OrderedEntries<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}
