//! Country domain: wire types, normalized types and the mapping between them.

pub mod continent;
mod country;
pub mod raw;
mod transform;

pub use continent::{display_name, matches_selection, Continent, AMERICAS_REGION};
pub use country::{Country, Currency};
pub use raw::RawCountry;
pub use transform::{CountryTransformer, DEFAULT_LOCALE};
