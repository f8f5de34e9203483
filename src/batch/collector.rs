//! # 源文件收集器
//!
//! 按后缀白名单列出目录中的待格式化文件，并发现所有子目录。
//!
//! ## 功能
//! - 单层目录扫描（不递归）
//! - 字面后缀匹配（区分大小写，非 glob）
//! - 递归发现子目录
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{FormatError, Result};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 源文件收集器
#[derive(Debug, Clone)]
pub struct SourceCollector {
    /// 后缀白名单
    extensions: Vec<String>,
}

impl SourceCollector {
    /// 创建新的收集器
    pub fn new(extensions: Vec<String>) -> Self {
        Self { extensions }
    }

    /// 文件名是否以任一后缀结尾
    pub fn matches_extension(&self, file_name: &str) -> bool {
        self.extensions
            .iter()
            .any(|ext| file_name.ends_with(ext.as_str()))
    }

    /// 列出 `dir` 下直接包含的待格式化文件
    ///
    /// 顺序即文件系统枚举顺序，不排序。目录项即使名字匹配也会被跳过。
    pub fn eligible_files<'a>(
        &'a self,
        dir: &Path,
    ) -> Result<impl Iterator<Item = Result<PathBuf>> + 'a> {
        let dir_display = dir.display().to_string();
        let entries = fs::read_dir(dir).map_err(|e| FormatError::DirectoryReadError {
            path: dir_display.clone(),
            source: e,
        })?;

        Ok(entries.filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    return Some(Err(FormatError::DirectoryReadError {
                        path: dir_display.clone(),
                        source: e,
                    }))
                }
            };

            if !self.matches_extension(&entry.file_name().to_string_lossy()) {
                return None;
            }

            let path = entry.path();
            if path.is_dir() {
                return None;
            }
            Some(Ok(path))
        }))
    }

    /// 递归发现 `root` 下的所有子目录（不含 `root` 本身）
    ///
    /// 不跟随符号链接进入目标，但指向目录的符号链接本身算作一个子目录。
    pub fn subdirectories(root: &Path) -> impl Iterator<Item = Result<PathBuf>> {
        let root_display = root.display().to_string();

        WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    let is_dir = entry.file_type().is_dir()
                        || (entry.path_is_symlink() && entry.path().is_dir());
                    is_dir.then(|| Ok(entry.into_path()))
                }
                Err(err) => {
                    let path = err
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| root_display.clone());
                    let source = err.into_io_error().unwrap_or_else(|| {
                        io::Error::new(io::ErrorKind::Other, "filesystem loop detected")
                    });
                    Some(Err(FormatError::DirectoryReadError { path, source }))
                }
            })
    }
}
