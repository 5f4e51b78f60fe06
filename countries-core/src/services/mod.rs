//! Service module
//!
//! Pure functions and small state machines behind the country pages.

mod borders;
mod catalog;
mod country_page;
mod lookup;
mod navigation;
mod normalize;

pub use borders::{resolve_borders, BorderLink};
pub use catalog::{filter_countries, regions};
pub use country_page::{CountryPage, CountryView};
pub use lookup::find_country;
pub use navigation::{go_back, NavState, NavigationIntent, Navigator, Route};
pub use normalize::{normalize, pluralize, NormalizedView};
