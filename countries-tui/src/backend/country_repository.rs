//! 国家数据仓库
//!
//! 从 JSON 文件读取国家集合（记录数组）
//! 实现 countries-core 的 CountryRepository trait

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use countries_core::{CoreError, CoreResult, CountryRecord, CountryRepository};
use tokio::fs;

/// 基于 JSON 文件的国家数据仓库
pub struct JsonCountryRepository {
    path: PathBuf,
}

impl JsonCountryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CountryRepository for JsonCountryRepository {
    async fn find_all(&self) -> CoreResult<Vec<CountryRecord>> {
        if !self.path.exists() {
            return Err(CoreError::StorageError(format!(
                "Data file not found: {}",
                self.path.display()
            )));
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;

        let countries = CountryRecord::list_from_json(&content)?;
        log::info!(
            "Loaded {} countries from {}",
            countries.len(),
            self.path.display()
        );

        Ok(countries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn loads_records_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countries.json");
        std::fs::write(
            &path,
            r#"[{"name": "Iceland", "region": "Europe"}, {"name": "Chile", "region": "Americas"}]"#,
        )
        .unwrap();

        let countries = JsonCountryRepository::new(&path).find_all().await.unwrap();
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[1].name, "Chile");
    }

    #[test]
    fn missing_file_is_storage_error() {
        let repo = JsonCountryRepository::new("/nonexistent/countries.json");
        let err = tokio_test::block_on(repo.find_all()).unwrap_err();
        assert!(matches!(err, CoreError::StorageError(_)));
        assert!(!err.is_expected());
    }

    #[test]
    fn malformed_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countries.json");
        std::fs::write(&path, r#"{"name": "not an array"}"#).unwrap();

        let err = tokio_test::block_on(JsonCountryRepository::new(&path).find_all()).unwrap_err();
        assert!(matches!(err, CoreError::SerializationError(_)));
    }
}
