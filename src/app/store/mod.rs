//! INI 存储模块
//!
//! 提供 INI 文件的加载、访问、修改和保存

pub mod ini_file;
pub mod outcome;

pub use ini_file::IniFile;
pub use outcome::{LoadOutcome, WriteOutcome};
