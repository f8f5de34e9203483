//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 参数
//! - `-d`: 逗号分隔的根目录列表
//! - `-b`: clang-format 可执行文件路径
//! - `-e`: 逗号分隔的文件后缀列表
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `config.rs` 构造 `FormatConfig`

use crate::config::DEFAULT_MAX_BATCH;

use clap::Parser;
use std::path::PathBuf;

/// formatall - 批量调用 clang-format 格式化源文件
#[derive(Parser, Debug)]
#[command(name = "formatall")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Run clang-format in batches over every source file under a set of directories",
    long_about = None
)]
pub struct Cli {
    /// Comma-separated list of root directories to search for source files
    #[arg(short = 'd', long = "dirs", value_delimiter = ',', default_value = ".")]
    pub dirs: Vec<PathBuf>,

    /// Path and filename of the clang-format executable
    #[arg(short = 'b', long = "binary", default_value = "./clang-format.exe")]
    pub binary: PathBuf,

    /// Comma-separated list of file suffixes to format
    #[arg(
        short = 'e',
        long = "extensions",
        value_delimiter = ',',
        default_values_t = [".c".to_string(), ".h".to_string(), ".cpp".to_string()]
    )]
    pub extensions: Vec<String>,

    /// Maximum number of files passed to a single clang-format invocation
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_BATCH,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub batch_size: u32,

    /// List the files and commands without running clang-format
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["formatall"]).unwrap();
        assert_eq!(cli.dirs, vec![PathBuf::from(".")]);
        assert_eq!(cli.binary, PathBuf::from("./clang-format.exe"));
        assert_eq!(cli.extensions, vec![".c", ".h", ".cpp"]);
        assert_eq!(cli.batch_size, 100);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_comma_separated_lists() {
        let cli = Cli::try_parse_from([
            "formatall",
            "-d",
            "dir1,dir2,dir3",
            "-b",
            "./some_dir/clang-format",
            "-e",
            ".c,.h,.cpp,.js",
        ])
        .unwrap();
        assert_eq!(
            cli.dirs,
            vec![
                PathBuf::from("dir1"),
                PathBuf::from("dir2"),
                PathBuf::from("dir3")
            ]
        );
        assert_eq!(cli.binary, PathBuf::from("./some_dir/clang-format"));
        assert_eq!(cli.extensions, vec![".c", ".h", ".cpp", ".js"]);
    }

    #[test]
    fn test_rejects_unknown_flag_and_zero_batch() {
        assert!(Cli::try_parse_from(["formatall", "-x", "foo"]).is_err());
        assert!(Cli::try_parse_from(["formatall", "stray"]).is_err());
        assert!(Cli::try_parse_from(["formatall", "--batch-size", "0"]).is_err());
    }
}
