//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod detail;
mod home;
mod modal;

pub use detail::DetailState;
pub use home::HomeState;
pub use modal::{Modal, ModalState};
