//! INI 格式模块
//!
//! 负责 INI 文本的解析、序列化以及值的类型转换

pub mod address;
pub mod coerce;
pub mod parser;
pub mod types;
pub mod writer;

pub use address::{compose_address, validate_address, ADDRESS_DELIMITER};
pub use coerce::FromIniText;
pub use parser::IniParser;
pub use types::{IniDocument, IniValue, Section};
