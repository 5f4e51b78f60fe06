//! Type definition module

mod country;

pub use country::{CountryRecord, Currency, NativeName};
