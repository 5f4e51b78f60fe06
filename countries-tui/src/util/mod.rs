//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关的基础设施代码：
//!     - terminal.rs   终端的初始化与恢复（raw mode + 备用屏幕）
//!     - logging.rs    日志初始化（写入日志文件，避免破坏 TUI 画面）

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, install_panic_hook, restore_terminal, Term};
