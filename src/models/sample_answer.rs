use serde::{Deserialize, Serialize};

/// 答案来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerSource {
    Pdf,
    Manual,
    Ai,
}

/// 答案审核状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerQuality {
    Verified,
    Unverified,
}

/// 模范答案记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleAnswerData {
    pub text: String,
    pub source: AnswerSource,
    pub quality: AnswerQuality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl SampleAnswerData {
    /// 从文档中提取的答案：来源 pdf，状态 unverified
    pub fn from_pdf(text: impl Into<String>, now: &str) -> Self {
        Self {
            text: text.into(),
            source: AnswerSource::Pdf,
            quality: AnswerQuality::Unverified,
            extracted_at: Some(now.to_string()),
            updated_at: Some(now.to_string()),
        }
    }
}
