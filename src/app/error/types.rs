use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// INI 文件错误类型
#[derive(Error, Debug)]
pub enum IniError {
    /// 节名或键名包含地址分隔符
    #[error("{component} name cannot contain dots: {name:?}")]
    InvalidAddress {
        component: &'static str,
        name: String,
    },

    /// 文件不存在
    #[error("INI file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// 文本语法错误
    #[error("Syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// 文件解析失败
    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// 值类型转换失败
    #[error(
        "Cannot convert {section}.{key} to {target}: {}",
        value.as_deref().unwrap_or("<missing>")
    )]
    Coercion {
        section: String,
        key: String,
        target: &'static str,
        value: Option<String>,
    },

    /// 写入失败
    #[error("{message}")]
    Write { message: String },

    /// 配置路径错误
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// 底层 I/O 错误
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<anyhow::Error> for IniError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(io_error) =
            err.downcast_ref::<std::io::Error>()
        {
            return IniError::Io(std::io::Error::new(
                io_error.kind(),
                format!("{:#}", err),
            ));
        }
        IniError::config(format!("{:#}", err))
    }
}

impl IniError {
    /// 创建地址错误
    pub fn invalid_address(
        component: &'static str,
        name: impl Into<String>,
    ) -> Self {
        Self::InvalidAddress {
            component,
            name: name.into(),
        }
    }

    /// 创建语法错误
    pub fn syntax(
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::Syntax {
            line,
            message: message.into(),
        }
    }

    /// 创建解析错误
    pub fn parse(
        path: impl AsRef<Path>,
        message: impl Into<String>,
    ) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// 创建类型转换错误
    pub fn coercion(
        section: impl Into<String>,
        key: impl Into<String>,
        target: &'static str,
        value: Option<&str>,
    ) -> Self {
        Self::Coercion {
            section: section.into(),
            key: key.into(),
            target,
            value: value.map(str::to_string),
        }
    }

    /// 创建写入错误
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write {
            message: message.into(),
        }
    }

    /// 创建配置错误
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, IniError>;
