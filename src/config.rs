//! # 运行配置
//!
//! 将命令行参数一次性转换为不可变的 `FormatConfig`，之后只读传递。
//!
//! ## 依赖关系
//! - 使用 `cli/mod.rs` 定义的参数
//! - 被 `commands/`, `batch/` 使用

use crate::cli::Cli;
use crate::error::{FormatError, Result};

use std::path::PathBuf;

/// 单次调用 clang-format 的默认最大文件数
pub const DEFAULT_MAX_BATCH: u32 = 100;

/// 格式化运行配置
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// 根目录（按顺序处理）
    pub root_dirs: Vec<PathBuf>,
    /// clang-format 可执行文件
    pub executable: PathBuf,
    /// 文件后缀白名单
    pub extensions: Vec<String>,
    /// 每批最大文件数
    pub max_batch: usize,
    /// 只列出，不执行
    pub dry_run: bool,
}

impl FormatConfig {
    /// 从命令行参数构造并校验配置
    pub fn from_cli(cli: Cli) -> Result<Self> {
        // 空后缀会匹配所有文件
        let extensions: Vec<String> = cli
            .extensions
            .into_iter()
            .filter(|ext| !ext.is_empty())
            .collect();
        if extensions.is_empty() {
            return Err(FormatError::InvalidArgument(
                "at least one non-empty file extension is required".to_string(),
            ));
        }

        if cli.batch_size == 0 {
            return Err(FormatError::InvalidArgument(
                "batch size must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            root_dirs: cli.dirs,
            executable: cli.binary,
            extensions,
            max_batch: cli.batch_size as usize,
            dry_run: cli.dry_run,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Result<FormatConfig> {
        let mut argv = vec!["formatall"];
        argv.extend_from_slice(args);
        FormatConfig::from_cli(Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_default_config() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.root_dirs, vec![PathBuf::from(".")]);
        assert_eq!(config.executable, PathBuf::from("./clang-format.exe"));
        assert_eq!(config.extensions, vec![".c", ".h", ".cpp"]);
        assert_eq!(config.max_batch, DEFAULT_MAX_BATCH as usize);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_empty_extensions_dropped() {
        let config = parse(&["-e", ".c,,.h,"]).unwrap();
        assert_eq!(config.extensions, vec![".c", ".h"]);
    }

    #[test]
    fn test_only_empty_extensions_rejected() {
        let err = parse(&["-e", ","]).unwrap_err();
        assert!(matches!(err, FormatError::InvalidArgument(_)));
    }

    #[test]
    fn test_batch_size_and_dry_run() {
        let config = parse(&["--batch-size", "7", "--dry-run"]).unwrap();
        assert_eq!(config.max_batch, 7);
        assert!(config.dry_run);
    }
}
