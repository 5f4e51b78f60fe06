//! 页面渲染

pub mod country;
pub mod home;
