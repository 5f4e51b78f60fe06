//! Utility module

pub mod collation;
pub mod format;
