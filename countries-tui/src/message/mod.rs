//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 按键事件由 event/handler.rs 翻译成 Message，
//! 后台加载结果由 app.rs 翻译成 Message，
//! Update 层只根据 Message 修改 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod content;        // 内容区子消息（列表、搜索、徽章）
//!         mod modal;          // 弹窗子消息
//!

mod app;
mod content;
mod modal;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
