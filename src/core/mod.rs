//! 核心功能：INI 格式的解析、序列化和类型转换

pub mod ini;
