//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用入口
//! - 加载主题表、初始化日志文件
//! - 按等级运行批量处理，合并题库
//! - 写出题目 JSON 与模范答案存储
//!
//! ### `batch_processor` - 批量文档处理器
//! - 扫描目录、控制并发
//! - 隔离单个文档的失败，有序汇总结果
//!
//! ## 层次关系
//!
//! ```text
//! app (处理多个等级)
//!     ↓
//! batch_processor (处理 Vec<Document>)
//!     ↓
//! workflow::DocumentFlow (处理单个文档)
//!     ↓
//! services (能力层：文本 / 题目 / 答案 / 表达 / 匹配 / 质量 / 存储)
//! ```

pub mod app;
pub mod batch_processor;

// 重新导出主要类型
pub use app::{App, RunSummary};
pub use batch_processor::{BatchProcessor, BatchReport};
