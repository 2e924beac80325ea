//! 应用入口 - 编排层
//!
//! 按配置的等级依次运行批量处理，合并题库，写出 JSON，并把答案写入模范答案存储。

use crate::config::Config;
use crate::error::AppResult;
use crate::models::{AnswerQuality, AnswerSource, Level, QuestionBank, TopicTable};
use crate::orchestrator::batch_processor::{BatchProcessor, BatchReport};
use crate::services::SampleAnswerStore;
use crate::utils::logging::{init_log_file, log_startup, print_final_stats};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    processor: BatchProcessor,
    store: SampleAnswerStore,
}

/// 一次完整运行的统计
#[derive(Debug, Default)]
pub struct RunSummary {
    pub questions: usize,
    pub answers_saved: usize,
    pub failed_documents: usize,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> AppResult<Self> {
        init_log_file(&config.output_log_file)?;

        let topics = match &config.topics_file {
            Some(path) => TopicTable::from_toml_file(path)?,
            None => TopicTable::builtin(),
        };

        log_startup(
            &config.pdf_folder,
            config.max_concurrent_documents,
            topics.len(),
        );

        let processor = BatchProcessor::new(&config, Arc::new(topics));
        let store = SampleAnswerStore::new(&config.sample_answer_store);

        Ok(Self {
            config,
            processor,
            store,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> AppResult<RunSummary> {
        let mut bank = QuestionBank::new();
        let mut summary = RunSummary::default();
        let mut saved_topics = BTreeSet::new();

        for &level in &self.config.levels {
            info!("\n🔎 正在解析 {} 等级题目...", level);
            let report = self.process_level(level).await?;
            info!("✓ {} 等级共 {} 道题目", level, report.questions.len());

            summary.failed_documents += report.failed;
            summary.answers_saved += self.save_answers(&report, &mut saved_topics).await?;
            bank = bank.merge(report.questions);
        }

        if bank.total() == 0 {
            warn!("⚠️ 没有提取到任何题目");
        }

        bank.write_json(&self.config.output_file).await?;
        summary.questions = bank.total();

        print_final_stats(
            summary.questions,
            summary.answers_saved,
            &self.config.output_file,
        );
        Ok(summary)
    }

    async fn process_level(&self, level: Level) -> AppResult<BatchReport> {
        self.processor
            .process_directory(&self.config.pdf_folder, level)
            .await
    }

    /// 每个主题只写一次答案（不同等级解析的是同一批文档）
    async fn save_answers(
        &self,
        report: &BatchReport,
        saved_topics: &mut BTreeSet<String>,
    ) -> AppResult<usize> {
        let mut written = 0;
        for document in &report.documents {
            if !saved_topics.insert(document.topic.clone()) {
                continue;
            }
            written += self
                .store
                .save_batch(
                    &document.topic,
                    &document.answers,
                    AnswerSource::Pdf,
                    AnswerQuality::Unverified,
                )
                .await?;
        }
        Ok(written)
    }
}
