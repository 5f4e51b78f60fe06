//! 配置服务
//!
//! 配置文件位置：~/.config/countries-explorer/config.json

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// 配置文件名
const CONFIG_FILE: &str = "config.json";

/// 默认数据文件名
const DEFAULT_DATA_FILE: &str = "countries.json";

/// 获取配置目录路径
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("countries-explorer")
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// 界面语言（BCP 47 代码）
    pub language: String,
    /// 国家数据文件；未设置时使用配置目录下的 countries.json
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    /// 日志级别（`RUST_LOG` 优先）
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            data_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// 解析数据文件路径：命令行 > 配置 > 默认位置
    pub fn resolve_data_file(&self, cli_override: Option<&Path>, dir: &Path) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.data_file.clone())
            .unwrap_or_else(|| dir.join(DEFAULT_DATA_FILE))
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务（JSON 文件）
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用默认配置目录
    pub fn new() -> Self {
        Self::with_dir(&config_dir())
    }

    /// 使用指定目录
    pub fn with_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(CONFIG_FILE),
        }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::debug!("No config file at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", self.path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_dir(dir.path());
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_dir(&dir.path().join("nested"));
        let config = AppConfig {
            language: "zh-CN".to_string(),
            data_file: Some(PathBuf::from("/data/countries.json")),
            log_level: "debug".to_string(),
        };
        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), r#"{"language": "zh-CN"}"#).unwrap();
        let config = LocalConfigService::with_dir(dir.path()).load().unwrap();
        assert_eq!(config.language, "zh-CN");
        assert_eq!(config.log_level, "info");
        assert!(config.data_file.is_none());
    }

    #[test]
    fn invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "not json").unwrap();
        assert!(LocalConfigService::with_dir(dir.path()).load().is_err());
    }

    #[test]
    fn data_file_resolution_order() {
        let dir = Path::new("/cfg");
        let mut config = AppConfig::default();
        assert_eq!(
            config.resolve_data_file(None, dir),
            PathBuf::from("/cfg/countries.json")
        );

        config.data_file = Some(PathBuf::from("/data/a.json"));
        assert_eq!(
            config.resolve_data_file(None, dir),
            PathBuf::from("/data/a.json")
        );
        assert_eq!(
            config.resolve_data_file(Some(Path::new("b.json")), dir),
            PathBuf::from("b.json")
        );
    }
}
