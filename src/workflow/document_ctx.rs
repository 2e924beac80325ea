//! 文档处理上下文
//!
//! 封装"我正在处理第几个文档、哪个等级"这一信息

use crate::models::Level;
use std::fmt::Display;
use std::path::PathBuf;

/// 文档处理上下文
#[derive(Debug, Clone)]
pub struct DocumentCtx {
    /// 文档路径
    pub path: PathBuf,

    /// 文档在本批中的索引（从1开始，仅用于日志显示）
    pub document_index: usize,

    /// 考试等级
    pub level: Level,
}

impl DocumentCtx {
    /// 创建新的文档上下文
    pub fn new(path: PathBuf, document_index: usize, level: Level) -> Self {
        Self {
            path,
            document_index,
            level,
        }
    }

    /// 文件名（不含目录），用于匹配主题表
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

impl Display for DocumentCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[文档 #{} {} 等级#{}]",
            self.document_index,
            self.file_name(),
            self.level
        )
    }
}
