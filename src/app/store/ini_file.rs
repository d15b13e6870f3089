//! INI 文件存储
//!
//! 通过 (节, 键) 地址读写值。节名和键名都不能包含 `.`，
//! 查找不区分大小写，写回磁盘时保留原始大小写。
//!
//! 缺失键的处理按访问器区分：
//! - [`IniFile::get_string`]、[`IniFile::get_boolean`]、[`IniFile::get`]
//!   返回 `Ok(None)`
//! - 数值访问器返回 [`IniError::Coercion`]，因为没有可解析的文本

use crate::app::config::paths::absolute_path;
use crate::app::error::types::{IniError, Result};
use crate::app::store::outcome::{LoadOutcome, WriteOutcome};
use crate::core::ini::{
    compose_address, validate_address, FromIniText, IniDocument,
    IniParser, IniValue,
};
use crate::core::ini::writer::render_checked;
use anyhow::Context;
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

/// INI 文件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniFile {
    document: IniDocument,
}

impl IniFile {
    /// 创建空的 INI 文件
    pub fn new() -> Self {
        Self::default()
    }

    /// 包装已解析的文档
    pub fn from_document(document: IniDocument) -> Self {
        Self { document }
    }

    /// 解析 INI 文本
    pub fn parse(text: &str) -> Result<Self> {
        IniParser::parse_str(text).map(Self::from_document)
    }

    /// 读取 INI 文件
    ///
    /// 文件不存在时返回 [`LoadOutcome::Absent`]，
    /// 无法解析时记录错误日志并返回 [`LoadOutcome::Failed`]。
    pub fn read<P: AsRef<Path>>(path: P) -> LoadOutcome {
        let path = absolute_path(path.as_ref());
        if !path.exists() {
            tracing::debug!("INI file not present: {:?}", path);
            return LoadOutcome::Absent { path };
        }

        match IniParser::from_file(&path) {
            Ok(document) => {
                tracing::info!("INI file loaded: {:?}", path);
                LoadOutcome::Loaded(Self::from_document(document))
            }
            Err(e) => {
                tracing::error!("Failed to parse: {:?}: {}", path, e);
                LoadOutcome::Failed {
                    path,
                    message: e.to_string(),
                }
            }
        }
    }

    /// 读取 INI 文件，不存在或解析失败都返回错误
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::read(path).into_result()
    }

    /// 写入 INI 文件，必要时创建父目录
    pub fn write<P: AsRef<Path>>(&self, path: P) -> WriteOutcome {
        let path = absolute_path(path.as_ref());
        match self.write_to(&path) {
            Ok(()) => {
                tracing::info!("INI file written: {:?}", path);
                WriteOutcome::Written
            }
            Err(e) => {
                let message = format!("{:#}", e);
                tracing::error!("{}", message);
                WriteOutcome::Failed(message)
            }
        }
    }

    fn write_to(&self, path: &Path) -> anyhow::Result<()> {
        let write_failed = || {
            format!(
                "Failed to write configuration to: {}",
                path.display()
            )
        };
        // 先确认文档能原样读回，再动磁盘
        let text = render_checked(&self.document).with_context(write_failed)?;

        if let Some(parent) = path.parent() {
            if !parent.is_dir() {
                fs::create_dir_all(parent).with_context(|| {
                    format!(
                        "Failed to create directory for configuration file: {}",
                        parent.display()
                    )
                })?;
            }
        }

        // BufWriter 和 File 离开作用域时关闭句柄
        let file = File::create(path).with_context(write_failed)?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(text.as_bytes())
            .and_then(|_| writer.flush())
            .with_context(write_failed)?;
        Ok(())
    }

    /// 节名列表（已排序，不含全局节）
    pub fn sections(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .document
            .sections()
            .filter(|s| !s.is_global())
            .map(|s| s.name().to_string())
            .collect();
        names.sort();
        names
    }

    /// 是否存在 (节, 键)
    pub fn has(&self, section: &str, key: &str) -> Result<bool> {
        validate_address(section, key)?;
        Ok(self.document.get(section, key).is_some())
    }

    /// 设置值，节不存在时自动创建
    pub fn set<V: Into<IniValue>>(
        &mut self,
        section: &str,
        key: &str,
        value: V,
    ) -> Result<()> {
        validate_address(section, key)?;
        let value = value.into();
        tracing::debug!(
            "Set {} = {}",
            compose_address(section, key),
            value
        );
        self.document.set(section, key, value.into_string());
        Ok(())
    }

    /// 按布尔值读取
    ///
    /// 与 [`IniFile::get_boolean`] 完全相同：通用读取一直按布尔值转换，
    /// 读取原始文本请使用 [`IniFile::get_string`]。
    pub fn get(&self, section: &str, key: &str) -> Result<Option<bool>> {
        self.get_boolean(section, key)
    }

    /// 读取字符串，缺失时返回 `None`
    pub fn get_string(
        &self,
        section: &str,
        key: &str,
    ) -> Result<Option<String>> {
        validate_address(section, key)?;
        Ok(self.document.get(section, key).map(str::to_string))
    }

    /// 读取布尔值，缺失时返回 `None`
    pub fn get_boolean(
        &self,
        section: &str,
        key: &str,
    ) -> Result<Option<bool>> {
        validate_address(section, key)?;
        match self.document.get(section, key) {
            None => Ok(None),
            Some(text) => bool::from_ini_text(text)
                .map(Some)
                .ok_or_else(|| {
                    IniError::coercion(
                        section,
                        key,
                        bool::TARGET,
                        Some(text),
                    )
                }),
        }
    }

    /// 按指定类型读取，缺失或无法转换时返回错误
    pub fn get_as<T: FromIniText>(
        &self,
        section: &str,
        key: &str,
    ) -> Result<T> {
        validate_address(section, key)?;
        let text = self.document.get(section, key);
        text.and_then(T::from_ini_text).ok_or_else(|| {
            IniError::coercion(section, key, T::TARGET, text)
        })
    }

    /// 读取 8 位整数
    pub fn get_byte(&self, section: &str, key: &str) -> Result<i8> {
        self.get_as(section, key)
    }

    /// 读取 16 位整数
    pub fn get_short(&self, section: &str, key: &str) -> Result<i16> {
        self.get_as(section, key)
    }

    /// 读取 32 位整数
    pub fn get_int(&self, section: &str, key: &str) -> Result<i32> {
        self.get_as(section, key)
    }

    /// 读取 64 位整数
    pub fn get_long(&self, section: &str, key: &str) -> Result<i64> {
        self.get_as(section, key)
    }

    /// 读取单精度浮点数
    pub fn get_float(&self, section: &str, key: &str) -> Result<f32> {
        self.get_as(section, key)
    }

    /// 读取双精度浮点数
    pub fn get_double(&self, section: &str, key: &str) -> Result<f64> {
        self.get_as(section, key)
    }

    /// 删除一个键，节本身保留
    pub fn remove_key(&mut self, section: &str, key: &str) -> Result<bool> {
        validate_address(section, key)?;
        let removed = self
            .document
            .section_mut(section)
            .is_some_and(|s| s.remove(key));
        tracing::debug!(
            "Remove {} (removed: {})",
            compose_address(section, key),
            removed
        );
        Ok(removed)
    }

    /// 删除整个节
    pub fn remove_section(&mut self, section: &str) -> Result<bool> {
        validate_address(section, "")?;
        let removed = self.document.remove_section(section);
        tracing::debug!("Remove section {} (removed: {})", section, removed);
        Ok(removed)
    }

    /// 底层文档
    pub fn document(&self) -> &IniDocument {
        &self.document
    }

    /// 取出底层文档
    pub fn into_document(self) -> IniDocument {
        self.document
    }
}

impl From<IniDocument> for IniFile {
    fn from(document: IniDocument) -> Self {
        Self::from_document(document)
    }
}

impl FromStr for IniFile {
    type Err = IniError;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}

impl fmt::Display for IniFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.document, f)
    }
}
