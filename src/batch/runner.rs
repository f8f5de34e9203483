//! # 批量执行器
//!
//! 逐目录累积待格式化文件，满批即提交给 `Formatter`。
//!
//! ## 功能
//! - 单目录扫描与分批（批次不跨目录）
//! - 根目录 + 所有子目录的顺序遍历
//! - 统计汇总
//!
//! ## 依赖关系
//! - 被 `commands/format.rs` 调用
//! - 使用 `batch/collector.rs` 收集文件
//! - 使用 `batch/formatter.rs` 执行批次

use super::collector::SourceCollector;
use super::formatter::Formatter;
use crate::config::FormatConfig;
use crate::error::Result;

use std::path::{Path, PathBuf};

/// 批量处理结果统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchResult {
    /// 扫描的目录数
    pub directories: usize,
    /// 提交格式化的文件数
    pub files: usize,
    /// 调用格式化程序的次数
    pub batches: usize,
}

impl BatchResult {
    /// 合并统计
    pub fn merge(&mut self, other: &BatchResult) {
        self.directories += other.directories;
        self.files += other.files;
        self.batches += other.batches;
    }
}

/// 批量执行器
pub struct BatchRunner<F> {
    collector: SourceCollector,
    formatter: F,
    /// 每批最大文件数
    max_batch: usize,
}

impl<F: Formatter> BatchRunner<F> {
    /// 创建新的批量执行器
    pub fn new(collector: SourceCollector, formatter: F, max_batch: usize) -> Self {
        Self {
            collector,
            formatter,
            max_batch: max_batch.max(1),
        }
    }

    /// 按运行配置创建
    pub fn from_config(config: &FormatConfig, formatter: F) -> Self {
        Self::new(
            SourceCollector::new(config.extensions.clone()),
            formatter,
            config.max_batch,
        )
    }

    /// 格式化根目录本身及其下所有子目录
    pub fn format_root(&mut self, root: &Path) -> Result<BatchResult> {
        let mut result = self.format_directory(root)?;

        for subdir in SourceCollector::subdirectories(root) {
            let subdir = subdir?;
            result.merge(&self.format_directory(&subdir)?);
        }

        Ok(result)
    }

    /// 扫描单个目录（不递归）并分批格式化
    pub fn format_directory(&mut self, dir: &Path) -> Result<BatchResult> {
        let Self {
            collector,
            formatter,
            max_batch,
        } = self;

        let mut result = BatchResult {
            directories: 1,
            ..Default::default()
        };
        let mut batch: Vec<PathBuf> = Vec::new();

        for file in collector.eligible_files(dir)? {
            batch.push(file?);
            if batch.len() >= *max_batch {
                flush(formatter, &mut batch, &mut result)?;
            }
        }

        if !batch.is_empty() {
            flush(formatter, &mut batch, &mut result)?;
        }

        Ok(result)
    }
}

/// 提交并清空当前批次
fn flush<F: Formatter>(
    formatter: &mut F,
    batch: &mut Vec<PathBuf>,
    result: &mut BatchResult,
) -> Result<()> {
    formatter.format_batch(batch)?;
    result.files += batch.len();
    result.batches += 1;
    batch.clear();
    Ok(())
}
