//! 通用 UI 组件

pub mod borders;
pub mod modal;
pub mod statusbar;
