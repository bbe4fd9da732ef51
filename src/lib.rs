//! Country explorer: fetch, search, filter and paginate country data from a
//! REST countries API.
//!
//! The interesting part is the state layer: a reducer-driven store
//! ([`store`]), a latest-wins fetch flow ([`flow`]) and a debounced search
//! input ([`debounce`]), tied together for front ends by [`explorer`].

pub mod api;
pub mod config;
pub mod debounce;
pub mod domain;
pub mod explorer;
pub mod flow;
pub mod logging;
pub mod service;
pub mod store;
