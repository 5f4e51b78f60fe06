//! 日志初始化
//!
//! TUI 独占终端，日志只能写入文件：
//!     <config_dir>/countries-explorer/countries-explorer.log
//!
//! 核心库通过 `log` 门面输出，由 tracing-subscriber 的 log 桥接收集。
//! 过滤级别优先取 `RUST_LOG`，否则使用配置中的 `log_level`。

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// 日志文件名
const LOG_FILE: &str = "countries-explorer.log";

/// 初始化日志，返回日志文件路径
pub fn init_logging(dir: &Path, level: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))?;

    Ok(path)
}
