use crate::error::{AppError, ConfigError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// 题目编号分隔符，字符串形式为 `<topic>-q<sequence>`
const ID_DELIMITER: &str = "-q";

/// 题目标识：主题 + 序号
///
/// 序号是题目与答案之间唯一的关联键。字符串形式只在 `Display`
/// 中生成、只在 `FromStr` 中解析。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId {
    pub topic: String,
    pub sequence: u32,
}

impl QuestionId {
    pub fn new(topic: impl Into<String>, sequence: u32) -> Self {
        Self {
            topic: topic.into(),
            sequence,
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.topic, ID_DELIMITER, self.sequence)
    }
}

impl FromStr for QuestionId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // 主题本身可能含有 "-q"，所以按最后一个分隔符切分
        let (topic, sequence) = s
            .rsplit_once(ID_DELIMITER)
            .ok_or_else(|| AppError::Other(format!("无效的题目ID: {}", s)))?;
        let sequence = sequence
            .parse::<u32>()
            .map_err(|_| AppError::Other(format!("无效的题目序号: {}", s)))?;
        if topic.is_empty() {
            return Err(AppError::Other(format!("题目ID缺少主题: {}", s)));
        }
        Ok(Self::new(topic, sequence))
    }
}

impl Serialize for QuestionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for QuestionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// 题型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// 自我介绍
    Warmup,
    /// 角色扮演
    Roleplay,
    /// 观点
    Opinion,
    /// 描述
    Narration,
    /// 总结
    Summary,
}

impl QuestionType {
    /// 按关键字推断题型
    ///
    /// 优先级：roleplay > narration > summary > warmup，其余为 opinion。
    pub fn classify(text: &str) -> Self {
        let lower = text.to_lowercase();
        let has = |keys: &[&str]| keys.iter().any(|k| lower.contains(k));

        if has(&["role", "역할"]) {
            QuestionType::Roleplay
        } else if has(&["describe", "설명", "tell me about"]) {
            QuestionType::Narration
        } else if has(&["summarize", "요약"]) {
            QuestionType::Summary
        } else if has(&["introduce", "소개", "tell me about yourself"]) {
            QuestionType::Warmup
        } else {
            QuestionType::Opinion
        }
    }

    /// 默认作答时间（秒）
    pub fn default_time_limit(self) -> u32 {
        match self {
            QuestionType::Roleplay => 90,
            QuestionType::Warmup => 60,
            _ => 120,
        }
    }
}

/// 考试等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    IH,
    AL,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::IH => "IH",
            Level::AL => "AL",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IH" => Ok(Level::IH),
            "AL" => Ok(Level::AL),
            _ => Err(ConfigError::UnknownLevel(s.to_string()).into()),
        }
    }
}

/// 题目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub text: String,
    pub level: Level,
    pub topic: String,
    pub time_limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub useful_expressions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_path: Option<String>,
}

impl Question {
    /// 由提取结果创建题目，题型和作答时间由文本推断
    pub fn new(topic: &str, sequence: u32, text: impl Into<String>, level: Level) -> Self {
        let text = text.into();
        let question_type = QuestionType::classify(&text);
        Self {
            id: QuestionId::new(topic, sequence),
            question_type,
            text,
            level,
            topic: topic.to_string(),
            time_limit: question_type.default_time_limit(),
            sample_answer: None,
            useful_expressions: None,
            audio_path: None,
        }
    }

    /// 题目序号
    pub fn sequence(&self) -> u32 {
        self.id.sequence
    }

    /// 用另一份题目覆盖当前题目；可选字段只在对方有值时覆盖
    pub fn overlay(&mut self, other: Question) {
        self.question_type = other.question_type;
        self.text = other.text;
        self.level = other.level;
        self.topic = other.topic;
        self.time_limit = other.time_limit;
        if other.sample_answer.is_some() {
            self.sample_answer = other.sample_answer;
        }
        if other.useful_expressions.is_some() {
            self.useful_expressions = other.useful_expressions;
        }
        if other.audio_path.is_some() {
            self.audio_path = other.audio_path;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_id_round_trips_through_string() {
        let id = QuestionId::new("work", 3);
        assert_eq!(id.to_string(), "work-q3");
        assert_eq!("work-q3".parse::<QuestionId>().unwrap(), id);
    }

    #[test]
    fn test_question_id_topic_may_contain_delimiter() {
        let id: QuestionId = "roleplay-questions-q12".parse().unwrap();
        assert_eq!(id.topic, "roleplay-questions");
        assert_eq!(id.sequence, 12);
    }

    #[test]
    fn test_question_id_rejects_garbage() {
        assert!("work".parse::<QuestionId>().is_err());
        assert!("work-qx".parse::<QuestionId>().is_err());
        assert!("-q1".parse::<QuestionId>().is_err());
    }

    #[test]
    fn test_classify_precedence() {
        assert_eq!(
            QuestionType::classify("Play the role of a customer and describe it."),
            QuestionType::Roleplay
        );
        assert_eq!(
            QuestionType::classify("Describe your favorite park."),
            QuestionType::Narration
        );
        assert_eq!(
            QuestionType::classify("Please SUMMARIZE the news you heard."),
            QuestionType::Summary
        );
        assert_eq!(
            QuestionType::classify("Please introduce yourself."),
            QuestionType::Warmup
        );
        assert_eq!(
            QuestionType::classify("자기 소개를 해 주세요."),
            QuestionType::Warmup
        );
        assert_eq!(
            QuestionType::classify("What do you think about remote work?"),
            QuestionType::Opinion
        );
    }

    #[test]
    fn test_tell_me_about_yourself_is_narration_by_precedence() {
        assert_eq!(
            QuestionType::classify("Tell me about yourself."),
            QuestionType::Narration
        );
    }

    #[test]
    fn test_time_limits() {
        assert_eq!(QuestionType::Roleplay.default_time_limit(), 90);
        assert_eq!(QuestionType::Warmup.default_time_limit(), 60);
        assert_eq!(QuestionType::Opinion.default_time_limit(), 120);
        assert_eq!(QuestionType::Summary.default_time_limit(), 120);
    }

    #[test]
    fn test_question_serializes_with_camel_case_and_omits_unset() {
        let q = Question::new("work", 1, "What is your job these days?", Level::IH);
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["id"], "work-q1");
        assert_eq!(json["type"], "opinion");
        assert_eq!(json["timeLimit"], 120);
        assert_eq!(json["level"], "IH");
        assert!(json.get("sampleAnswer").is_none());

        let back: Question = serde_json::from_value(json).unwrap();
        assert_eq!(back, q);
    }

    #[test]
    fn test_level_parse() {
        assert_eq!(" al ".parse::<Level>().unwrap(), Level::AL);
        assert!("IM".parse::<Level>().is_err());
    }
}
