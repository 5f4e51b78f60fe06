//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责配置与数据的读写。
//! 查找、规范化等纯逻辑由 countries-core 提供。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;         // 配置读写（JSON 文件）
//!         mod country_repository;     // 国家数据仓库（JSON 文件）
//!         mod loader;                 // 后台加载任务（tokio）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     启动 / 用户按 Alt+r
//!         ↓
//!     CountryLoader::spawn_load() 在 tokio 运行时中调用
//!     CountryRepository::find_all()
//!         ↓
//!     结果通过 mpsc 通道送回主循环（app.rs）
//!         ↓
//!     主循环将其转换为 AppMessage::CountriesLoaded / LoadFailed
//!         ↓
//!     Update 层替换集合并递增 revision，详情页随之重新查找
//!

mod config_service;
mod country_repository;
mod loader;

pub use config_service::{config_dir, AppConfig, ConfigService, LocalConfigService};
pub use country_repository::JsonCountryRepository;
pub use loader::{CountryLoader, LoadResult};
