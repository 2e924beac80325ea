//! # OPIc Question Miner
//!
//! 从课程文档（OCR 后的 PDF）中提取题目、模范答案和常用表达的批处理工具
//!
//! ## 架构设计
//!
//! ### ① 模型层（Models）
//! - `models/` - 题目、题目标识、主题表、解析结果、答案记录、题库
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个能力都是纯函数或单一职责的结构
//! - 文本提取 / 题目提取 / 答案提取 / 表达提取 / 匹配 / 质量检查 / 答案存储
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个文档"的完整处理流程
//! - `DocumentCtx` - 上下文封装（文件 + 索引 + 等级）
//! - `DocumentFlow` - 流程编排（主题 → 文本 → 提取 → 匹配 → 补全）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量文档处理器，管理并发与失败隔离
//! - `orchestrator/app` - 应用入口，按等级运行并写出结果
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Level, ParsedDocument, Question, QuestionBank, QuestionId, TopicTable};
pub use orchestrator::{App, BatchProcessor, BatchReport};
pub use workflow::{DocumentCtx, DocumentFlow, ProcessResult};
