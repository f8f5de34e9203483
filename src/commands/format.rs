//! # format 命令实现
//!
//! 依次处理每个根目录，分批调用 clang-format。
//!
//! ## 功能
//! - 根目录按顺序逐个处理
//! - 可选 dry-run
//! - 终端汇总表格
//!
//! ## 依赖关系
//! - 使用 `config.rs` 定义的运行配置
//! - 使用 `batch/`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchResult, BatchRunner, ClangFormat, DryRun, Formatter};
use crate::config::FormatConfig;
use crate::error::Result;
use crate::utils::output;

use std::path::PathBuf;
use tabled::{Table, Tabled};

/// 汇总表格行
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Root")]
    root: String,
    #[tabled(rename = "Directories")]
    directories: usize,
    #[tabled(rename = "Files")]
    files: usize,
    #[tabled(rename = "Batches")]
    batches: usize,
}

/// 执行格式化
pub fn execute(config: &FormatConfig) -> Result<()> {
    output::print_header("Batch clang-format");

    output::print_info(&format!(
        "Formatter: {} (max {} files per call)",
        config.executable.display(),
        config.max_batch
    ));
    output::print_info(&format!("Extensions: {}", config.extensions.join(", ")));

    let results = if config.dry_run {
        output::print_dry("clang-format will not be executed");
        format_roots(config, DryRun::new(&config.executable))?
    } else {
        format_roots(config, ClangFormat::new(&config.executable))?
    };

    print_summary(&results);

    let mut total = BatchResult::default();
    for (_, result) in &results {
        total.merge(result);
    }
    output::print_done(&format!(
        "Formatted {} files in {} batches across {} directories",
        total.files, total.batches, total.directories
    ));

    Ok(())
}

/// 按顺序处理全部根目录，遇到第一个致命错误即停止
fn format_roots<F: Formatter>(
    config: &FormatConfig,
    formatter: F,
) -> Result<Vec<(PathBuf, BatchResult)>> {
    let mut runner = BatchRunner::from_config(config, formatter);
    let mut results = Vec::with_capacity(config.root_dirs.len());

    for root in &config.root_dirs {
        output::print_info(&format!("Scanning '{}'...", root.display()));
        let result = runner.format_root(root)?;

        if result.files == 0 {
            output::print_warning(&format!(
                "No matching files found under '{}'",
                root.display()
            ));
        } else {
            output::print_success(&format!(
                "{}: {} files in {} batches",
                root.display(),
                result.files,
                result.batches
            ));
        }
        results.push((root.clone(), result));
    }

    Ok(results)
}

/// 打印汇总表格
fn print_summary(results: &[(PathBuf, BatchResult)]) {
    let rows: Vec<SummaryRow> = results
        .iter()
        .map(|(root, result)| SummaryRow {
            root: root.display().to_string(),
            directories: result.directories,
            files: result.files,
            batches: result.batches,
        })
        .collect();

    output::print_separator();
    println!("{}", Table::new(&rows));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_BATCH;
    use crate::error::FormatError;
    use std::fs;
    use tempfile::TempDir;

    fn config(roots: Vec<PathBuf>, executable: PathBuf, dry_run: bool) -> FormatConfig {
        FormatConfig {
            root_dirs: roots,
            executable,
            extensions: vec![".c".to_string(), ".h".to_string()],
            max_batch: DEFAULT_MAX_BATCH as usize,
            dry_run,
        }
    }

    #[test]
    fn test_dry_run_over_multiple_roots() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(first.path().join("a.c"), "").unwrap();
        fs::create_dir(second.path().join("inc")).unwrap();
        fs::write(second.path().join("inc/b.h"), "").unwrap();

        let cfg = config(
            vec![first.path().to_path_buf(), second.path().to_path_buf()],
            PathBuf::from("./clang-format.exe"),
            true,
        );
        let results = format_roots(&cfg, DryRun::new(&cfg.executable)).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, first.path());
        assert_eq!(results[0].1.files, 1);
        assert_eq!(results[1].1.files, 1);
        assert_eq!(results[1].1.directories, 2);
        assert!(execute(&cfg).is_ok());
    }

    #[test]
    fn test_missing_formatter_is_fatal() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.c"), "").unwrap();

        let exe = tmp.path().join("missing-clang-format");
        let cfg = config(vec![tmp.path().to_path_buf()], exe.clone(), false);
        let err = execute(&cfg).unwrap_err();

        assert!(matches!(err, FormatError::ExecutableNotFound { .. }));
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains(&exe.display().to_string()));
    }

    #[test]
    fn test_missing_formatter_without_files_succeeds() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("readme.txt"), "").unwrap();

        let cfg = config(
            vec![tmp.path().to_path_buf()],
            tmp.path().join("missing-clang-format"),
            false,
        );
        assert!(execute(&cfg).is_ok());
    }
}
