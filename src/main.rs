//! # formatall - 批量 clang-format 工具
//!
//! 在指定目录及其所有子目录中查找源文件，按批调用 clang-format 原地格式化。
//!
//! ## 用法
//! ```text
//! formatall -d "dir1,dir2" -b ./clang-format -e ".c,.h,.cpp"
//! ```
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── config.rs   (不可变运行配置)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── batch/     (文件收集、分批、进程调用)
//!   ├── utils/      (输出与进度)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod config;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use std::error::Error;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        let mut msg = e.to_string();
        let mut source = e.source();
        while let Some(cause) = source {
            msg.push_str(&format!("\nCaused by: {}", cause));
            source = cause.source();
        }
        utils::output::print_error(&msg);
        std::process::exit(e.exit_code());
    }
}
