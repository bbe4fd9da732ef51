//! State layer: MVI primitives, the store container and the countries slice.

mod container;
pub mod countries;
pub mod mvi;

pub use container::Store;
pub use countries::{CountriesIntent, CountriesState, CountriesStore};
