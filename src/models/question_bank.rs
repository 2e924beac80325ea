//! 题库：按等级保存题目，显式合并而非全局可变表

use crate::error::{AppError, AppResult};
use crate::models::question::{Level, Question};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 按等级划分的题库
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionBank {
    pub ih: Vec<Question>,
    pub al: Vec<Question>,
    #[serde(default)]
    total: usize,
}

impl QuestionBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// 合并一批题目，返回新的题库
    ///
    /// 同一等级下 ID 已存在的题目按字段覆盖，否则追加到末尾。
    pub fn merge(mut self, questions: impl IntoIterator<Item = Question>) -> Self {
        for question in questions {
            let list = self.level_mut(question.level);
            match list.iter_mut().find(|q| q.id == question.id) {
                Some(existing) => existing.overlay(question),
                None => list.push(question),
            }
        }
        self.total = self.ih.len() + self.al.len();
        self
    }

    pub fn level(&self, level: Level) -> &[Question] {
        match level {
            Level::IH => &self.ih,
            Level::AL => &self.al,
        }
    }

    fn level_mut(&mut self, level: Level) -> &mut Vec<Question> {
        match level {
            Level::IH => &mut self.ih,
            Level::AL => &mut self.al,
        }
    }

    pub fn total(&self) -> usize {
        self.ih.len() + self.al.len()
    }

    /// 写出 `{ ih, al, total }` 格式的 JSON 文件
    pub async fn write_json(&self, path: &Path) -> AppResult<()> {
        let display = path.display().to_string();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| AppError::file_write_failed(&display, e))?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::json_parse_failed(&display, e))?;
        tokio::fs::write(path, json)
            .await
            .map_err(|e| AppError::file_write_failed(&display, e))
    }
}
