//! # 统一错误处理模块
//!
//! 定义 formatall 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// 找不到格式化程序时的退出码
pub const EXIT_EXECUTABLE_NOT_FOUND: i32 = 2;

/// 其他致命错误的退出码
pub const EXIT_FAILURE: i32 = 1;

/// formatall 统一错误类型
#[derive(Error, Debug)]
pub enum FormatError {
    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("Cannot find executable \"{path}\"")]
    ExecutableNotFound { path: String },

    #[error("Failed to launch '{command}'")]
    LaunchFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error while running '{command}'")]
    ProcessIo {
        command: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read directory: {path}")]
    DirectoryReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl FormatError {
    /// 进程退出码：只有找不到可执行文件时返回 2
    pub fn exit_code(&self) -> i32 {
        match self {
            FormatError::ExecutableNotFound { .. } => EXIT_EXECUTABLE_NOT_FOUND,
            _ => EXIT_FAILURE,
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, FormatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let missing = FormatError::ExecutableNotFound {
            path: "./clang-format.exe".to_string(),
        };
        assert_eq!(missing.exit_code(), 2);
        assert_eq!(
            missing.to_string(),
            "Cannot find executable \"./clang-format.exe\""
        );

        let launch = FormatError::LaunchFailed {
            command: "clang-format".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "boom"),
        };
        assert_eq!(launch.exit_code(), 1);
        assert_eq!(FormatError::InvalidArgument("x".into()).exit_code(), 1);
    }
}
