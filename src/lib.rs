//! 简单的 INI 配置文件库
//!
//! 加载 INI 文件，按 (节, 键) 读取类型化的值，修改后写回磁盘
//!
//! ## 功能特性
//!
//! - 不区分大小写的节/键查找，写回时保留原始大小写
//! - 布尔、整数、浮点和字符串的按需转换
//! - 区分“文件不存在”和“解析失败”的读取结果
//! - 写入时自动创建父目录，写入前确认内容能原样读回
//!
//! ## 使用示例
//!
//! ```no_run
//! use simple_ini::{IniFile, LoadOutcome};
//!
//! let mut ini = match IniFile::read("settings.ini") {
//!     LoadOutcome::Loaded(ini) => ini,
//!     LoadOutcome::Absent { .. } => IniFile::new(),
//!     LoadOutcome::Failed { message, .. } => panic!("{}", message),
//! };
//!
//! ini.set("server", "port", 8080)?;
//! let port = ini.get_int("server", "port")?;
//! println!("port = {}", port);
//!
//! if let Some(message) = ini.write("settings.ini").diagnostic() {
//!     eprintln!("{}", message);
//! }
//! # Ok::<(), simple_ini::IniError>(())
//! ```

pub mod app;
pub mod core;

// 重新导出主要功能
pub use crate::app::config::paths::IniPaths;
pub use crate::app::error::types::{IniError, Result};
pub use crate::app::logging::init_logging;
pub use crate::app::store::{IniFile, LoadOutcome, WriteOutcome};
pub use crate::core::ini::{
    FromIniText, IniDocument, IniValue, Section, ADDRESS_DELIMITER,
};
