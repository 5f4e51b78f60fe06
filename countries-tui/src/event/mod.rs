//!
//! src/event/mod.rs
//! Event 层：输入处理
//!
//! 把 crossterm 的原始终端事件翻译成 AppMessage：
//!     - poll_event()      等待输入（带超时，不阻塞后台加载结果的处理）
//!     - handle_event()    根据当前页面与弹窗状态选择对应的消息
//!
//!     主页上的可打印字符进入搜索框，所以全局快捷键都带修饰键（Alt / Ctrl）。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
