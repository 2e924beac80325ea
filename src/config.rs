use crate::error::{AppError, AppResult};
use crate::models::Level;
use serde::Deserialize;
use std::path::PathBuf;

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 课程文档所在目录
    pub pdf_folder: PathBuf,
    /// 题目导出文件
    pub output_file: PathBuf,
    /// 模范答案存储文件
    pub sample_answer_store: PathBuf,
    /// 外部主题表（TOML），未设置时使用内置主题表
    pub topics_file: Option<PathBuf>,
    /// 音频路径前缀
    pub audio_base_path: String,
    /// 参与处理的文档扩展名
    pub document_extensions: Vec<String>,
    /// 需要解析的等级
    pub levels: Vec<Level>,
    /// 同时处理的文档数量
    pub max_concurrent_documents: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pdf_folder: PathBuf::from("HACKERS OPIc PDF"),
            output_file: PathBuf::from("lib/hackers-questions.json"),
            sample_answer_store: PathBuf::from("lib/sample-answers.json"),
            topics_file: None,
            audio_base_path: "/audio/hackers".to_string(),
            document_extensions: vec!["pdf".to_string()],
            levels: vec![Level::IH, Level::AL],
            max_concurrent_documents: 4,
            verbose_logging: false,
            output_log_file: PathBuf::from("output.txt"),
        }
    }
}

impl Config {
    /// 从环境变量覆盖默认配置
    pub fn from_env() -> AppResult<Self> {
        Self::default().with_env_overrides()
    }

    /// 加载配置：先读 `OPIC_CONFIG` 指向的 TOML 文件（可选），再应用环境变量
    pub fn load() -> AppResult<Self> {
        let base = match std::env::var("OPIC_CONFIG") {
            Ok(path) => Self::from_toml_file(&path)?,
            Err(_) => Self::default(),
        };
        base.with_env_overrides()
    }

    /// 从 TOML 文件读取配置，缺省字段使用默认值
    pub fn from_toml_file(path: &str) -> AppResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| AppError::file_read_failed(path, e))?;
        Self::from_toml_str(&content, path)
    }

    fn from_toml_str(content: &str, origin: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|e| AppError::toml_parse_failed(origin, e))
    }

    fn with_env_overrides(self) -> AppResult<Self> {
        let mut config = self;
        if let Ok(v) = std::env::var("PDF_FOLDER") {
            config.pdf_folder = PathBuf::from(v);
        }
        if let Ok(v) = std::env::var("OUTPUT_FILE") {
            config.output_file = PathBuf::from(v);
        }
        if let Ok(v) = std::env::var("SAMPLE_ANSWER_STORE") {
            config.sample_answer_store = PathBuf::from(v);
        }
        if let Ok(v) = std::env::var("TOPICS_FILE") {
            config.topics_file = Some(PathBuf::from(v));
        }
        if let Ok(v) = std::env::var("AUDIO_BASE_PATH") {
            config.audio_base_path = v;
        }
        if let Ok(v) = std::env::var("DOCUMENT_EXTENSIONS") {
            config.document_extensions = split_list(&v);
        }
        if let Ok(v) = std::env::var("LEVELS") {
            config.levels = split_list(&v)
                .iter()
                .map(|s| s.parse::<Level>())
                .collect::<AppResult<Vec<_>>>()?;
        }
        if let Ok(v) = std::env::var("MAX_CONCURRENT_DOCUMENTS") {
            config.max_concurrent_documents = parse_env("MAX_CONCURRENT_DOCUMENTS", &v, "usize")?;
        }
        if let Ok(v) = std::env::var("VERBOSE_LOGGING") {
            config.verbose_logging = parse_env("VERBOSE_LOGGING", &v, "bool")?;
        }
        if let Ok(v) = std::env::var("OUTPUT_LOG_FILE") {
            config.output_log_file = PathBuf::from(v);
        }
        // 并发数为 0 时 Semaphore 永远拿不到许可
        config.max_concurrent_documents = config.max_concurrent_documents.max(1);
        Ok(config)
    }

    /// 判断文件扩展名是否在处理范围内（忽略大小写）
    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.document_extensions
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().trim_start_matches('.').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_env<T: std::str::FromStr>(var_name: &str, value: &str, expected: &str) -> AppResult<T> {
    value.parse().map_err(|_| {
        crate::error::ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value: value.to_string(),
            expected_type: expected.to_string(),
        }
        .into()
    })
}
