//! 应用层：错误、日志、路径和 INI 存储

pub mod config;
pub mod error;
pub mod logging;
pub mod store;
