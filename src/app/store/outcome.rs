//! 读写操作的结果类型

use crate::app::error::types::{IniError, Result};
use crate::app::store::ini_file::IniFile;
use std::path::{Path, PathBuf};

/// [`IniFile::read`] 的结果
///
/// 文件不存在和解析失败是两种不同的结果，调用方需要分别处理。
#[derive(Debug)]
pub enum LoadOutcome {
    /// 读取成功
    Loaded(IniFile),
    /// 文件尚不存在
    Absent { path: PathBuf },
    /// 文件存在但无法读取或解析
    Failed { path: PathBuf, message: String },
}

impl LoadOutcome {
    /// 是否读取成功
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// 是否为文件不存在
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent { .. })
    }

    /// 是否为解析失败
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// 涉及的文件路径（读取成功时为 `None`）
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Loaded(_) => None,
            Self::Absent { path } | Self::Failed { path, .. } => {
                Some(path.as_path())
            }
        }
    }

    /// 取出读取到的文件
    pub fn loaded(self) -> Option<IniFile> {
        match self {
            Self::Loaded(ini) => Some(ini),
            _ => None,
        }
    }

    /// 转为 `Result`，不存在和解析失败都作为错误
    pub fn into_result(self) -> Result<IniFile> {
        match self {
            Self::Loaded(ini) => Ok(ini),
            Self::Absent { path } => Err(IniError::NotFound { path }),
            Self::Failed { path, message } => {
                Err(IniError::parse(path, message))
            }
        }
    }
}

/// [`IniFile::write`] 的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// 写入成功
    Written,
    /// 写入失败，附带诊断信息
    Failed(String),
}

impl WriteOutcome {
    /// 是否写入成功
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written)
    }

    /// 诊断信息，成功时为 `None`
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::Written => None,
            Self::Failed(message) => Some(message),
        }
    }

    /// 转为 `Result`
    pub fn into_result(self) -> Result<()> {
        match self {
            Self::Written => Ok(()),
            Self::Failed(message) => Err(IniError::write(message)),
        }
    }
}
