//! 批量文档处理器 - 编排层
//!
//! ## 职责
//!
//! 扫描目录中的全部课程文档，逐个交给 `DocumentFlow`，汇总为一个有序的题目列表。
//!
//! ## 核心功能
//!
//! 1. **目录扫描**：非递归，按扩展名过滤，按文件名排序（保证输出稳定）
//! 2. **并发控制**：使用 Semaphore 限制同时处理的文档数量
//! 3. **失败隔离**：单个文档失败只记录日志，不影响整批
//! 4. **有序汇总**：按文件名顺序拼接各文档结果
//!
//! 目录本身无法读取是整批的致命错误。

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{Level, ParsedDocument, Question, TopicTable};
use crate::utils::logging::{log_batch_complete, log_batch_start};
use crate::workflow::{DocumentCtx, DocumentFlow, ProcessResult};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Semaphore;
use tracing::{debug, error, info, warn};

/// 一次批量处理的结果
#[derive(Debug, Default)]
pub struct BatchReport {
    /// 所有文档的题目，按文件名顺序拼接
    pub questions: Vec<Question>,
    /// 至少产出一道题目的文档
    pub documents: Vec<ParsedDocument>,
    /// 成功解析的文档数
    pub parsed: usize,
    /// 不在主题表中或没有题目的文档数
    pub skipped: usize,
    /// 读取或解码失败的文档数
    pub failed: usize,
}

/// 批量文档处理器
pub struct BatchProcessor {
    flow: Arc<DocumentFlow>,
    config: Config,
}

impl BatchProcessor {
    pub fn new(config: &Config, topics: Arc<TopicTable>) -> Self {
        Self {
            flow: Arc::new(DocumentFlow::new(config, topics)),
            config: config.clone(),
        }
    }

    /// 列出目录中待处理的文档（按文件名排序）
    pub async fn list_documents(&self, dir: &Path) -> AppResult<Vec<PathBuf>> {
        let display = dir.display().to_string();
        let mut entries = fs::read_dir(dir)
            .await
            .map_err(|e| AppError::directory_read_failed(&display, e))?;

        let mut documents = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| AppError::directory_read_failed(&display, e))?
        {
            let path = entry.path();
            // 跟随符号链接
            let is_file = fs::metadata(&path).await.map(|m| m.is_file()).unwrap_or(false);
            let accepted = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| self.config.accepts_extension(ext));
            if is_file && accepted {
                documents.push(path);
            }
        }

        documents.sort();
        Ok(documents)
    }

    /// 处理目录中的全部文档
    ///
    /// # 参数
    /// - `dir`: 文档目录
    /// - `level`: 考试等级
    ///
    /// # 返回
    /// 汇总结果；只有目录无法读取时返回错误
    pub async fn process_directory(&self, dir: &Path, level: Level) -> AppResult<BatchReport> {
        let documents = self.list_documents(dir).await?;
        log_batch_start(level.as_str(), documents.len());

        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_documents.max(1)));
        let mut handles = Vec::with_capacity(documents.len());

        for (idx, path) in documents.into_iter().enumerate() {
            let ctx = DocumentCtx::new(path, idx + 1, level);
            let permit = semaphore
                .clone()
                .acquire_owned()
                .await
                .map_err(|e| AppError::Other(format!("无法获取并发许可: {}", e)))?;
            let flow = Arc::clone(&self.flow);

            let handle = tokio::spawn(async move {
                let _permit = permit;
                let result = flow.run(&ctx).await;
                (ctx, result)
            });
            handles.push(handle);
        }

        let mut report = BatchReport::default();
        for handle in handles {
            match handle.await {
                Ok((ctx, result)) => record(&mut report, &ctx, result),
                Err(e) => {
                    error!("文档任务执行失败: {}", e);
                    report.failed += 1;
                }
            }
        }

        log_batch_complete(
            level.as_str(),
            report.parsed,
            report.skipped,
            report.failed,
            report.questions.len(),
        );
        Ok(report)
    }
}

/// 把单个文档的结果计入汇总
fn record(report: &mut BatchReport, ctx: &DocumentCtx, result: AppResult<ProcessResult>) {
    match result {
        Ok(ProcessResult::Parsed(parsed)) if parsed.questions.is_empty() => {
            warn!("{} ⚠️ 未提取到任何题目，跳过", ctx);
            report.skipped += 1;
        }
        Ok(ProcessResult::Parsed(parsed)) => {
            if parsed.flagged_answers() > 0 {
                info!("{} 有 {} 条答案需要人工复核", ctx, parsed.flagged_answers());
            }
            report.parsed += 1;
            report.questions.extend(parsed.questions.iter().cloned());
            report.documents.push(parsed);
        }
        Ok(ProcessResult::NoTopic) => {
            debug!("{} 无对应主题", ctx);
            report.skipped += 1;
        }
        Err(e) => {
            warn!("{} ❌ 文档处理失败，跳过: {}", ctx, e);
            report.failed += 1;
        }
    }
}
