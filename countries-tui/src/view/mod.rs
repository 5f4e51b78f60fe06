//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 + 内容区 + 状态栏 + 弹窗
//!         mod theme;          // 颜色与常用样式
//!         mod components;     // 状态栏、邻国徽章、弹窗
//!         mod pages;          // 主页、国家详情页
//!

mod components;
mod layout;
mod pages;
mod theme;

pub use layout::render;
