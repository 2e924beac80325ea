use crate::models::question::{Question, QuestionId};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// 答案质量问题
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualityIssue {
    TooShort,
    AbnormallyLong,
    LooksIncomplete,
    AbnormalLineBreaks,
}

impl fmt::Display for QualityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            QualityIssue::TooShort => "too short",
            QualityIssue::AbnormallyLong => "abnormally long (extraction region may be mis-bounded)",
            QualityIssue::LooksIncomplete => "looks incomplete (no terminal punctuation)",
            QualityIssue::AbnormalLineBreaks => "abnormal line-break density (possible column-layout OCR artifact)",
        };
        f.write_str(text)
    }
}

impl Serialize for QualityIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// 答案质量报告，仅作提示，不影响答案保存
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityReport {
    pub is_valid: bool,
    pub issues: Vec<QualityIssue>,
}

impl QualityReport {
    pub fn from_issues(issues: Vec<QualityIssue>) -> Self {
        Self {
            is_valid: issues.is_empty(),
            issues,
        }
    }

    pub fn has(&self, issue: QualityIssue) -> bool {
        self.issues.contains(&issue)
    }

    /// 以分号拼接的问题描述，用于日志
    pub fn summary(&self) -> String {
        self.issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// 单个文档的解析结果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDocument {
    /// 主题 ID
    pub topic: String,
    /// 源文件
    pub source_file: PathBuf,
    /// 已补全答案、表达和音频的题目（按序号升序）
    pub questions: Vec<Question>,
    /// 原始答案表：序号 -> 答案文本
    pub answers: BTreeMap<u32, String>,
    /// 文档中的常用表达
    pub useful_expressions: Vec<String>,
    /// 已匹配答案的质量报告
    pub quality: BTreeMap<QuestionId, QualityReport>,
}

impl ParsedDocument {
    /// 存在质量问题的答案数量
    pub fn flagged_answers(&self) -> usize {
        self.quality.values().filter(|r| !r.is_valid).count()
    }
}
