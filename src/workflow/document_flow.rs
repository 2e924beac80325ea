//! 文档处理流程 - 流程层
//!
//! 核心职责：定义"一个文档"的完整处理流程
//!
//! 流程顺序：
//! 1. 按文件名解析主题（找不到则跳过，不算错误）
//! 2. 读取文本
//! 3. 提取题目 / 答案 / 表达（互不依赖）
//! 4. 按序号匹配答案，检查答案质量
//! 5. 补全题目：答案、表达、音频路径

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::AppResult;
use crate::models::{Level, ParsedDocument, TopicDescriptor, TopicTable};
use crate::services::{
    extract_answers, extract_expressions, extract_questions, extract_text, match_answers,
    validate_answer,
};
use crate::utils::logging::truncate_text;
use crate::workflow::document_ctx::DocumentCtx;

/// 文档处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 解析完成（题目可能为空，由调用方决定是否跳过）
    Parsed(ParsedDocument),
    /// 文件名不在主题表中
    NoTopic,
}

/// 文档处理流程
///
/// - 编排单个文档的提取、匹配、检查与补全
/// - 不持有可变状态，多个文档可以并行处理
pub struct DocumentFlow {
    topics: Arc<TopicTable>,
    audio_base_path: String,
    verbose_logging: bool,
}

impl DocumentFlow {
    /// 创建新的文档处理流程
    pub fn new(config: &Config, topics: Arc<TopicTable>) -> Self {
        Self {
            topics,
            audio_base_path: config.audio_base_path.clone(),
            verbose_logging: config.verbose_logging,
        }
    }

    pub async fn run(&self, ctx: &DocumentCtx) -> AppResult<ProcessResult> {
        let file_name = ctx.file_name();

        let Some(topic) = self.topics.by_pdf_file_name(&file_name) else {
            debug!("{} 不在主题表中，跳过", ctx);
            return Ok(ProcessResult::NoTopic);
        };

        info!("{} 📖 主题: {} ({})", ctx, topic.id, topic.name_ko);

        let text = extract_text(&ctx.path).await?;
        let mut parsed = assemble(&text, topic, ctx.level, &self.audio_base_path);
        parsed.source_file = ctx.path.clone();

        self.log_parsed(ctx, &parsed);
        Ok(ProcessResult::Parsed(parsed))
    }

    fn log_parsed(&self, ctx: &DocumentCtx, parsed: &ParsedDocument) {
        info!(
            "{} ✓ 题目 {} 道, 答案 {} 条, 表达 {} 条",
            ctx,
            parsed.questions.len(),
            parsed.answers.len(),
            parsed.useful_expressions.len()
        );

        if self.verbose_logging {
            for question in &parsed.questions {
                info!(
                    "{}   {} [{:?}] {}",
                    ctx,
                    question.id,
                    question.question_type,
                    truncate_text(&question.text, 80)
                );
            }
        }
    }
}

/// 对一份已读取的文本执行提取、匹配与补全
///
/// # 参数
/// - `text`: 文档原始文本（不会被修改）
/// - `topic`: 已解析的主题
/// - `level`: 考试等级
/// - `audio_base_path`: 音频路径前缀
///
/// # 返回
/// 单个文档的解析结果，`source_file` 为空，由调用方填写
pub fn assemble(
    text: &str,
    topic: &TopicDescriptor,
    level: Level,
    audio_base_path: &str,
) -> ParsedDocument {
    let mut questions = extract_questions(text, &topic.id, level);
    let answers = extract_answers(text);
    let useful_expressions = extract_expressions(text);

    let mut matched = match_answers(&questions, &answers);
    let audio_path = topic
        .audio_file_name
        .as_deref()
        .map(|name| audio_path(audio_base_path, name));

    let mut quality = BTreeMap::new();
    for question in &mut questions {
        if let Some(answer) = matched.remove(&question.id) {
            let report = validate_answer(&answer);
            if !report.is_valid {
                warn!(
                    "⚠️ 答案 {} 可能有问题: {} | {}",
                    question.id,
                    report.summary(),
                    truncate_text(&answer, 60)
                );
            }
            quality.insert(question.id.clone(), report);
            question.sample_answer = Some(answer);
        }
        if !useful_expressions.is_empty() {
            question.useful_expressions = Some(useful_expressions.clone());
        }
        if let Some(path) = &audio_path {
            question.audio_path = Some(path.clone());
        }
    }

    ParsedDocument {
        topic: topic.id.clone(),
        source_file: Default::default(),
        questions,
        answers,
        useful_expressions,
        quality,
    }
}

/// 由主题音频文件名生成音频路径
pub fn audio_path(base: &str, audio_file_name: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), audio_file_name)
}
