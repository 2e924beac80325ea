//! 题目提取 - 业务能力层

use crate::models::{Level, Question};
use crate::services::markers::{
    sections, ANSWER_HEADING, ANSWER_MARKER, EXPRESSION_MARKER, QUESTION_MARKER,
};
use std::collections::BTreeMap;
use tracing::debug;

/// 短于该长度的正文视为噪声
pub const MIN_BODY_CHARS: usize = 11;

/// 从文本中提取题目
///
/// # 参数
/// - `text`: 文档原始文本
/// - `topic`: 主题 ID
/// - `level`: 考试等级
///
/// # 返回
/// 按序号升序排列的题目；同一序号只保留第一次出现的正文。
pub fn extract_questions(text: &str, topic: &str, level: Level) -> Vec<Question> {
    let stops = [
        &*QUESTION_MARKER,
        &*ANSWER_MARKER,
        &*ANSWER_HEADING,
        &*EXPRESSION_MARKER,
    ];

    let mut by_number: BTreeMap<u32, &str> = BTreeMap::new();
    for section in sections(text, &QUESTION_MARKER, &stops) {
        let Some(number) = section.number else {
            continue;
        };
        if section.body.chars().count() < MIN_BODY_CHARS {
            debug!("忽略过短的题目 Q{}: {:?}", number, section.body);
            continue;
        }
        by_number.entry(number).or_insert(section.body);
    }

    by_number
        .into_iter()
        .map(|(number, body)| Question::new(topic, number, body, level))
        .collect()
}
