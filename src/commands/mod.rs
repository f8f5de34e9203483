//! # 命令执行模块
//!
//! 实现格式化流程。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `config.rs`, `batch/`, `utils/`
//! - 子模块: format

pub mod format;

use crate::cli::Cli;
use crate::config::FormatConfig;
use crate::error::Result;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    let config = FormatConfig::from_cli(cli)?;
    format::execute(&config)
}
