//! Storage layer abstraction trait definition

mod country_repository;

pub use country_repository::CountryRepository;
