//! INI 文件路径管理模块
//! 负责在工作目录、可执行文件目录和用户配置目录中定位 INI 文件

use crate::app::error::types::Result;
use anyhow::Context;
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// INI 文件路径管理器
pub struct IniPaths {
    ini_file: PathBuf,
}

impl IniPaths {
    /// 按文件名定位 INI 文件
    ///
    /// 依次查找当前工作目录、可执行文件目录和用户配置目录，
    /// 都不存在时使用当前工作目录下的路径。
    ///
    /// # 示例
    /// ```
    /// use simple_ini::app::config::paths::IniPaths;
    /// let paths = IniPaths::new("settings.ini").unwrap();
    /// assert!(paths.ini_file().to_string_lossy().contains("settings.ini"));
    /// ```
    pub fn new(file_name: &str) -> Result<Self> {
        let current_dir = std::env::current_dir()
            .context("Failed to get current directory")?;

        let mut search_dirs = vec![current_dir];
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                search_dirs.push(exe_dir.to_path_buf());
            }
        }
        if let Some(config_dir) = dirs::config_dir() {
            search_dirs.push(config_dir);
        }

        Ok(Self::resolve_in(file_name, &search_dirs))
    }

    /// 在给定目录中查找，返回第一个存在的文件，否则使用第一个目录
    pub fn resolve_in(file_name: &str, search_dirs: &[PathBuf]) -> Self {
        let found = search_dirs
            .iter()
            .map(|dir| dir.join(file_name))
            .find(|candidate| candidate.is_file());

        let ini_file = match found {
            Some(path) => {
                tracing::info!("Found INI file: {:?}", path);
                path
            }
            None => {
                let fallback = search_dirs
                    .first()
                    .map(|dir| dir.join(file_name))
                    .unwrap_or_else(|| PathBuf::from(file_name));
                tracing::info!("Using INI file path: {:?}", fallback);
                fallback
            }
        };

        Self {
            ini_file: absolute_path(&ini_file),
        }
    }

    /// 获取 INI 文件路径
    pub fn ini_file(&self) -> &Path {
        &self.ini_file
    }
}

/// 转为绝对路径，失败时保留原路径
pub fn absolute_path(path: &Path) -> PathBuf {
    path.absolutize()
        .map(|p| p.into_owned())
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_prefers_existing_file() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        std::fs::write(second.path().join("app.ini"), "[a]\n").unwrap();

        let paths = IniPaths::resolve_in(
            "app.ini",
            &[first.path().to_path_buf(), second.path().to_path_buf()],
        );
        assert_eq!(paths.ini_file(), second.path().join("app.ini"));
    }

    #[test]
    fn test_resolve_falls_back_to_first_dir() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();

        let paths = IniPaths::resolve_in(
            "app.ini",
            &[first.path().to_path_buf(), second.path().to_path_buf()],
        );
        assert_eq!(paths.ini_file(), first.path().join("app.ini"));
    }

    #[test]
    fn test_absolute_path() {
        let path = absolute_path(Path::new("some/relative.ini"));
        assert!(path.is_absolute());
        assert!(path.ends_with("some/relative.ini"));
    }
}
