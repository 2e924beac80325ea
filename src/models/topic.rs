use crate::error::{AppError, AppResult, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 内置主题条目（编译期常量）
#[derive(Debug, Clone, Copy)]
pub struct StaticTopic {
    pub name: &'static str,
    pub name_ko: &'static str,
    pub pdf_file_name: Option<&'static str>,
    pub audio_file_name: Option<&'static str>,
}

macro_rules! lesson {
    ($name:expr, $name_ko:expr, $stem:expr) => {
        StaticTopic {
            name: $name,
            name_ko: $name_ko,
            pdf_file_name: Some(concat!($stem, "_unlocked-ocr.pdf")),
            audio_file_name: Some(concat!($stem, ".mp3")),
        }
    };
}

/// 内置课程主题表，键为主题 ID，保持课程顺序
pub static BUILTIN_TOPICS: phf::OrderedMap<&'static str, StaticTopic> = phf::phf_ordered_map! {
    "school" => lesson!("School & Classes", "학교, 수업", "1강_학교, 수업"),
    "work" => lesson!("Work & Office", "직장, 업무", "2강_직장, 업무"),
    "living" => lesson!("Living Place", "사는 곳", "3강_사는 곳"),
    "neighborhood" => lesson!("Neighborhood", "동네 및 이웃", "4강_동네 및 이웃"),
    "movies" => lesson!("Watching Movies", "영화 관람", "5강_영화 관람"),
    "park" => lesson!("Going to Park", "공원가기", "6강_공원가기"),
    "beach" => lesson!("Beach & Camping", "해변, 캠핑 가기", "7강_해변, 캠핑 가기"),
    "sports-watching" => lesson!("Watching Sports", "스포츠 관람", "8강_스포츠 관람"),
    "shopping" => lesson!("Shopping", "쇼핑하기", "9강_쇼핑하기"),
    "tv" => lesson!("TV & Reality Shows", "TV, 리얼리티 쇼 시청하기", "10강_TV, 리얼리티 쇼 시청하기"),
    "cafe" => lesson!("Cafe & Coffee Shop", "카페, 커피전문점에 가기", "11강_카페, 커피전문점에 가기"),
    "sns" => lesson!("Posting on SNS", "SNS에 글 올리기", "12강_SNS에 글 올리기"),
    "music" => lesson!("Listening to Music", "음악 감상하기", "13강_음악 감상하기"),
    "instruments" => lesson!("Playing Instruments", "악기 연주하기", "14강_악기 연주하기"),
    "cooking" => lesson!("Cooking", "요리하기", "15강_요리하기"),
    "reading" => lesson!("Reading", "독서", "16강_독서"),
    "sports-playing" => lesson!("Playing Sports (Basketball, Baseball, Soccer)", "농구, 야구, 축구", "17강_농구, 야구, 축구"),
    "yoga-fitness" => lesson!("Yoga & Fitness", "요가, 헬스", "18강_요가, 헬스"),
    "swimming" => lesson!("Swimming", "수영", "19강_수영"),
    "biking" => lesson!("Biking", "자전거", "20강_자전거"),
    "travel" => lesson!("Domestic & International Travel", "국내, 해외 여행", "21강_국내, 해외 여행"),
    "business-trip" => lesson!("Business Trip", "국내, 해외 출장", "22강_국내, 해외 출장"),
    "staycation" => lesson!("Staycation", "집에서 보내는 휴가", "23강_집에서 보내는 휴가"),
    "surprise-1" => lesson!("Surprise Topics 1", "돌발주제-집안일, 외식, 인터넷 서핑, 명절", "24강_돌발주제-집안일, 외식, 인터넷 서핑, 명절"),
    "surprise-2" => lesson!("Surprise Topics 2", "돌발주제-교통수단, 프로젝트, 날씨, 도서관", "25강_돌발주제-교통수단, 프로젝트, 날씨, 도서관"),
    "surprise-3" => lesson!("Surprise Topics 3", "돌발주제-산업, 가구, 약속, 은행", "26강_돌발주제-산업, 가구, 약속, 은행"),
    "surprise-4" => lesson!("Surprise Topics 4", "돌발주제-지역축제, 지형, 패션, 전화통화", "27강_돌발주제-지역축제, 지형, 패션, 전화통화"),
    "surprise-5" => lesson!("Surprise Topics 5", "돌발주제-호텔, 기술, 건강, 재활용", "28강_돌발주제-호텔, 기술, 건강, 재활용"),
    "roleplay-questions" => lesson!("Role-play: Asking Questions", "롤플레이-질문하기", "29강_롤플레이-질문하기"),
    "roleplay-solving" => lesson!("Role-play: Problem Solving", "롤플레이-문제 해결하기", "30강_롤플레이-문제 해결하기"),
    "important-types" => lesson!("Important Question Types", "OPIc 중요 유형들 정리", "31강_OPIc 중요 유형들 정리"),
    "common-topics" => lesson!("Common Topics Summary", "OPIc 빈출 주제들 정리", "32강_OPIc 빈출 주제들 정리"),
    "tips" => lesson!("High Score Tips & Emergency Phrases", "실전 시험 고득점 Tip & 위기탈출 문장 특강", "33강_실전 시험 고득점 Tip & 위기탈출 문장 특강"),
};

/// 主题描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicDescriptor {
    pub id: String,
    pub name: String,
    pub name_ko: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_file_name: Option<String>,
}

impl TopicDescriptor {
    fn from_static(id: &str, topic: &StaticTopic) -> Self {
        Self {
            id: id.to_string(),
            name: topic.name.to_string(),
            name_ko: topic.name_ko.to_string(),
            pdf_file_name: topic.pdf_file_name.map(str::to_string),
            audio_file_name: topic.audio_file_name.map(str::to_string),
        }
    }

    /// 主题分类
    pub fn category(&self) -> TopicCategory {
        if self.id.starts_with("surprise") {
            TopicCategory::Surprise
        } else if self.id.starts_with("roleplay") {
            TopicCategory::Roleplay
        } else if self.id.contains("types") || self.id.contains("common") || self.id.contains("tips")
        {
            TopicCategory::Summary
        } else {
            TopicCategory::Main
        }
    }
}

/// 主题分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicCategory {
    /// 常规主题
    Main,
    /// 突发主题
    Surprise,
    /// 角色扮演
    Roleplay,
    /// 总结类课程
    Summary,
}

#[derive(Debug, Deserialize)]
struct TopicFile {
    topics: Vec<TopicDescriptor>,
}

/// 主题表，按文件名解析文档所属主题
#[derive(Debug, Clone)]
pub struct TopicTable {
    topics: Vec<TopicDescriptor>,
}

impl TopicTable {
    /// 内置主题表
    pub fn builtin() -> Self {
        Self {
            topics: BUILTIN_TOPICS
                .entries()
                .map(|(id, topic)| TopicDescriptor::from_static(id, topic))
                .collect(),
        }
    }

    pub fn new(topics: Vec<TopicDescriptor>) -> Self {
        Self { topics }
    }

    /// 从 TOML 文件加载主题表（`[[topics]]` 数组），替换内置主题表
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let display = path.display().to_string();
        let content =
            std::fs::read_to_string(path).map_err(|e| AppError::file_read_failed(&display, e))?;
        let file: TopicFile =
            toml::from_str(&content).map_err(|e| AppError::toml_parse_failed(&display, e))?;
        if file.topics.is_empty() {
            return Err(ConfigError::EmptyTopicTable { path: display }.into());
        }
        Ok(Self::new(file.topics))
    }

    /// 按主题 ID 查找
    pub fn by_id(&self, id: &str) -> Option<&TopicDescriptor> {
        self.topics.iter().find(|t| t.id == id)
    }

    /// 按文档文件名精确匹配
    pub fn by_pdf_file_name(&self, file_name: &str) -> Option<&TopicDescriptor> {
        self.topics
            .iter()
            .find(|t| t.pdf_file_name.as_deref() == Some(file_name))
    }

    /// 按音频文件名精确匹配
    pub fn by_audio_file_name(&self, file_name: &str) -> Option<&TopicDescriptor> {
        self.topics
            .iter()
            .find(|t| t.audio_file_name.as_deref() == Some(file_name))
    }

    /// 按分类筛选
    pub fn by_category(&self, category: TopicCategory) -> Vec<&TopicDescriptor> {
        self.topics
            .iter()
            .filter(|t| t.category() == category)
            .collect()
    }

    pub fn all(&self) -> &[TopicDescriptor] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

impl Default for TopicTable {
    fn default() -> Self {
        Self::builtin()
    }
}
