//! 模范答案存储 - 业务能力层
//!
//! JSON 文件，键为题目 ID，值为 `SampleAnswerData`。

use crate::error::{AppError, AppResult};
use crate::models::{AnswerQuality, AnswerSource, Question, QuestionId, SampleAnswerData};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info};

/// 存储内容：题目 ID -> 答案记录
pub type SampleAnswers = BTreeMap<QuestionId, SampleAnswerData>;

/// 模范答案存储
pub struct SampleAnswerStore {
    path: PathBuf,
}

impl SampleAnswerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn display(&self) -> String {
        self.path.display().to_string()
    }

    /// 读取全部记录；文件不存在时返回空表
    pub async fn load(&self) -> AppResult<SampleAnswers> {
        if !fs::try_exists(&self.path).await.unwrap_or(false) {
            return Ok(SampleAnswers::new());
        }
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| AppError::file_read_failed(self.display(), e))?;
        if content.trim().is_empty() {
            return Ok(SampleAnswers::new());
        }
        serde_json::from_str(&content).map_err(|e| AppError::json_parse_failed(self.display(), e))
    }

    async fn persist(&self, answers: &SampleAnswers) -> AppResult<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| AppError::file_write_failed(self.display(), e))?;
        }
        let json = serde_json::to_string_pretty(answers)
            .map_err(|e| AppError::json_parse_failed(self.display(), e))?;
        fs::write(&self.path, json)
            .await
            .map_err(|e| AppError::file_write_failed(self.display(), e))?;
        debug!("已写入 {} 条模范答案到 {}", answers.len(), self.display());
        Ok(())
    }

    /// 查询单个题目的答案
    pub async fn get(&self, id: &QuestionId) -> AppResult<Option<SampleAnswerData>> {
        Ok(self.load().await?.remove(id))
    }

    /// 保存或更新单个答案，保留已有的提取时间
    pub async fn save(
        &self,
        id: QuestionId,
        text: impl Into<String>,
        source: AnswerSource,
        quality: AnswerQuality,
    ) -> AppResult<()> {
        let mut answers = self.load().await?;
        upsert(&mut answers, id, text.into(), source, quality, &now());
        self.persist(&answers).await
    }

    /// 批量保存同一主题下按序号索引的答案
    ///
    /// # 参数
    /// - `topic`: 主题 ID，与序号组合成题目 ID
    /// - `answers`: 序号 -> 答案文本
    /// - `source` / `quality`: 文档提取的答案约定为 `Pdf` / `Unverified`
    ///
    /// # 返回
    /// 写入的条数
    pub async fn save_batch(
        &self,
        topic: &str,
        answers: &BTreeMap<u32, String>,
        source: AnswerSource,
        quality: AnswerQuality,
    ) -> AppResult<usize> {
        if answers.is_empty() {
            return Ok(0);
        }
        let mut store = self.load().await?;
        let now = now();
        for (sequence, text) in answers {
            upsert(
                &mut store,
                QuestionId::new(topic, *sequence),
                text.clone(),
                source,
                quality,
                &now,
            );
        }
        self.persist(&store).await?;
        info!("💾 主题 {} 写入 {} 条模范答案", topic, answers.len());
        Ok(answers.len())
    }

    /// 删除答案，返回是否存在
    pub async fn delete(&self, id: &QuestionId) -> AppResult<bool> {
        let mut answers = self.load().await?;
        if answers.remove(id).is_none() {
            return Ok(false);
        }
        self.persist(&answers).await?;
        Ok(true)
    }

    /// 所有未审核的答案
    pub async fn unverified(&self) -> AppResult<Vec<(QuestionId, SampleAnswerData)>> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .filter(|(_, data)| data.quality == AnswerQuality::Unverified)
            .collect())
    }

    /// 更新审核状态，返回是否存在
    pub async fn update_quality(&self, id: &QuestionId, quality: AnswerQuality) -> AppResult<bool> {
        let mut answers = self.load().await?;
        let Some(data) = answers.get_mut(id) else {
            return Ok(false);
        };
        data.quality = quality;
        data.updated_at = Some(now());
        self.persist(&answers).await?;
        Ok(true)
    }

    /// 把已存储的答案填入题目
    pub async fn apply_to_questions(&self, questions: Vec<Question>) -> AppResult<Vec<Question>> {
        let answers = self.load().await?;
        Ok(questions
            .into_iter()
            .map(|mut q| {
                if let Some(data) = answers.get(&q.id) {
                    q.sample_answer = Some(data.text.clone());
                }
                q
            })
            .collect())
    }
}

fn upsert(
    answers: &mut SampleAnswers,
    id: QuestionId,
    text: String,
    source: AnswerSource,
    quality: AnswerQuality,
    now: &str,
) {
    let extracted_at = answers
        .get(&id)
        .and_then(|existing| existing.extracted_at.clone())
        .unwrap_or_else(|| now.to_string());
    answers.insert(
        id,
        SampleAnswerData {
            text,
            source,
            quality,
            extracted_at: Some(extracted_at),
            updated_at: Some(now.to_string()),
        },
    );
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}
