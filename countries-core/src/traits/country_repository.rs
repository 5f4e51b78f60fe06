//! Country collection provisioning abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::CountryRecord;

/// Country collection source Trait
///
/// Platform implementation:
/// - TUI: `JsonCountryRepository` (JSON file on disk)
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// Get the full country collection
    async fn find_all(&self) -> CoreResult<Vec<CountryRecord>>;
}
