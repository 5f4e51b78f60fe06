//! Countries Explorer TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与数据加载 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Cli::parse()            // 解析命令行
//!     load config             // 读取 config.json
//!     init_logging()          // 日志写入配置目录下的文件，不占用终端
//!     spawn_load()            // 在 tokio 运行时中加载国家集合
//!     model::App:new()        // 命令行给出国家名时直接进入详情页（无 from 标记）
//!     init_terminal()
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use countries_core::{NavState, Route};

use backend::{config_dir, ConfigService, CountryLoader, JsonCountryRepository, LocalConfigService};
use i18n::{set_language, Language};
use util::{init_logging, init_terminal, install_panic_hook, restore_terminal};

/// Browse country details in the terminal
#[derive(Debug, Parser)]
#[command(name = "countries-explorer", version, about)]
struct Cli {
    /// Open this country's detail page directly
    country: Option<String>,

    /// JSON file holding the country collection
    #[arg(long, value_name = "FILE", env = "COUNTRIES_DATA")]
    data: Option<PathBuf>,

    /// Interface language (en-US, zh-CN)
    #[arg(long, value_name = "CODE")]
    lang: Option<String>,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // 1. 配置与日志
    let dir = config_dir();
    let config_service = LocalConfigService::new();
    let mut config = config_service.load()?;
    let log_file = init_logging(&dir, &config.log_level)?;
    log::info!("Logging to {}", log_file.display());

    let code = cli.lang.as_deref().unwrap_or(&config.language);
    match Language::from_code(code) {
        Some(language) => set_language(language),
        None => log::warn!("Unknown language {code}, falling back to default"),
    }

    // 2. 后台加载国家集合
    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    let repository = JsonCountryRepository::new(
        config.resolve_data_file(cli.data.as_deref(), &dir),
    );
    log::info!("Country data file: {}", repository.path().display());
    let (loader, mut results) = CountryLoader::new(Arc::new(repository), runtime.handle().clone());
    loader.spawn_load();

    // 3. 创建应用实例
    let initial = cli.country.map_or(Route::Home, Route::Country);
    let mut app = model::App::new(initial, NavState::direct());

    // 4. 初始化终端并运行主循环
    install_panic_hook();
    let mut terminal = init_terminal()?;
    let mut services = app::Services {
        loader: &loader,
        results: &mut results,
        config_service: &config_service,
        config: &mut config,
    };
    let result = app::run(&mut terminal, &mut app, &mut services);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    result
}
