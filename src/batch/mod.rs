//! # 批量处理模块
//!
//! 收集源文件、分批并调用格式化程序。
//!
//! ## 功能
//! - 按后缀收集文件，递归发现子目录
//! - 按最大批次大小分批
//! - 顺序调用外部格式化程序
//!
//! ## 依赖关系
//! - 被 `commands/format.rs` 使用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod formatter;
pub mod runner;

pub use formatter::{ClangFormat, DryRun, Formatter};
pub use runner::{BatchResult, BatchRunner};
