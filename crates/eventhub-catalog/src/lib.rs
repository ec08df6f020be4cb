//! Event catalog for EventHub.
//!
//! Loads and validates event records, and narrows and orders them by
//! category, price tier, free-text query, and sort key.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod filter;
pub mod sort;

pub use catalog::Catalog;
pub use engine::{render, BrowseView};
pub use error::CatalogError;
pub use filter::FilterCriteria;
pub use sort::compare;
