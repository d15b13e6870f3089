//! 配置路径模块
//!
//! 提供 INI 文件位置的查找功能

pub mod paths;
