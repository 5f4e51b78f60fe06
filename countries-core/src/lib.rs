//! Countries Explorer Core Library
//!
//! Provides the platform-independent logic behind the country detail page:
//! - Case-insensitive country lookup
//! - Field normalization into display-ready lists (`NormalizedView`)
//! - Back-navigation contract and the detail view state machine
//! - Border resolution and list filtering for the root view
//!
//! The country collection is injected explicitly; storage is abstracted
//! through the [`CountryRepository`] trait.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{
    filter_countries, find_country, go_back, normalize, pluralize, regions, resolve_borders,
    BorderLink, CountryPage, CountryView, NavState, NavigationIntent, Navigator, NormalizedView,
    Route,
};
pub use traits::CountryRepository;
pub use types::{CountryRecord, Currency, NativeName};
