//! 错误处理模块

pub mod types;

pub use types::{IniError, Result};
