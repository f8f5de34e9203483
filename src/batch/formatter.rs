//! # 格式化程序调用
//!
//! 每个批次调用一次外部 clang-format：`<exe> -i <file1> ... <fileN>`。
//!
//! ## 功能
//! - `Formatter` trait：批次执行接口
//! - `ClangFormat`：启动外部进程，逐行转发 stdout
//! - `DryRun`：只打印将要执行的命令
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`, `commands/format.rs` 使用
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::error::{FormatError, Result};
use crate::utils::{output, progress};

use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// 原地修改参数
pub const IN_PLACE_FLAG: &str = "-i";

/// 批次执行接口
pub trait Formatter {
    /// 格式化一个非空批次
    fn format_batch(&mut self, files: &[PathBuf]) -> Result<()>;
}

/// 外部 clang-format 进程
#[derive(Debug, Clone)]
pub struct ClangFormat {
    executable: PathBuf,
}

impl ClangFormat {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    fn command_name(&self) -> String {
        self.executable.display().to_string()
    }

    /// 区分“找不到可执行文件”与其他启动失败
    fn launch_error(&self, e: io::Error) -> FormatError {
        match e.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                FormatError::ExecutableNotFound {
                    path: self.command_name(),
                }
            }
            _ => FormatError::LaunchFailed {
                command: self.command_name(),
                source: e,
            },
        }
    }

    fn io_error(&self, e: io::Error) -> FormatError {
        FormatError::ProcessIo {
            command: self.command_name(),
            source: e,
        }
    }
}

impl Formatter for ClangFormat {
    fn format_batch(&mut self, files: &[PathBuf]) -> Result<()> {
        for file in files {
            output::print_formatting(file);
        }

        // stderr 继承父进程，不捕获
        let mut child = Command::new(&self.executable)
            .args(batch_arguments(files))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| self.launch_error(e))?;

        drop(child.stdin.take());

        let spinner = progress::create_spinner(&format!(
            "Running {} on {} files",
            self.command_name(),
            files.len()
        ));

        if let Some(stdout) = child.stdout.take() {
            let mut reader = BufReader::new(stdout);
            let mut buf = Vec::new();
            loop {
                buf.clear();
                let read = reader
                    .read_until(b'\n', &mut buf)
                    .map_err(|e| self.io_error(e))?;
                if read == 0 {
                    break;
                }
                let line = String::from_utf8_lossy(&buf);
                let line = line.trim_end_matches(['\n', '\r']);
                spinner.suspend(|| output::print_tool_output(line));
            }
        }

        // 退出码不检查
        child.wait().map_err(|e| self.io_error(e))?;
        spinner.finish_and_clear();

        Ok(())
    }
}

/// 只打印，不执行
#[derive(Debug, Clone)]
pub struct DryRun {
    executable: PathBuf,
}

impl DryRun {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

impl Formatter for DryRun {
    fn format_batch(&mut self, files: &[PathBuf]) -> Result<()> {
        for file in files {
            output::print_formatting(file);
        }
        output::print_dry(&format!(
            "{} {} <{} files>",
            self.executable.display(),
            IN_PLACE_FLAG,
            files.len()
        ));
        Ok(())
    }
}

/// 构造某批次的完整参数列表（不含可执行文件本身）
pub fn batch_arguments(files: &[PathBuf]) -> Vec<&Path> {
    std::iter::once(Path::new(IN_PLACE_FLAG))
        .chain(files.iter().map(PathBuf::as_path))
        .collect()
}
