/// 日志工具模块
///
/// 提供日志初始化、格式化和输出的辅助函数
use crate::error::{AppError, AppResult};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 订阅者
///
/// 优先使用 `RUST_LOG`；未设置时详细模式为 `debug`，否则为 `info`。
/// 重复调用是安全的（测试中会多次调用）。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &Path) -> AppResult<()> {
    let log_header = format!(
        "{}\n课程文档解析日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    std::fs::write(log_file_path, log_header)
        .map_err(|e| AppError::file_write_failed(log_file_path.display().to_string(), e))
}

/// 记录程序启动信息
pub fn log_startup(folder: &Path, max_concurrent: usize, topic_count: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 课程文档题目解析");
    info!("📁 文档目录: {}", folder.display());
    info!("📊 最大并发数: {}", max_concurrent);
    info!("🗂️ 主题数量: {}", topic_count);
    info!("{}", "=".repeat(60));
}

/// 记录批次开始信息
///
/// # 参数
/// - `level`: 等级
/// - `total`: 文档总数
pub fn log_batch_start(level: &str, total: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📦 开始解析 {} 等级, 共 {} 个文档", level, total);
    info!("{}", "=".repeat(60));
}

/// 记录批次完成信息
pub fn log_batch_complete(level: &str, parsed: usize, skipped: usize, failed: usize, questions: usize) {
    info!("\n{}", "─".repeat(60));
    info!(
        "✓ {} 等级完成: 解析 {}, 跳过 {}, 失败 {}, 题目 {} 道",
        level, parsed, skipped, failed, questions
    );
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
pub fn print_final_stats(total_questions: usize, answers_saved: usize, output_file: &Path) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 题目总数: {}", total_questions);
    info!("💾 写入答案: {}", answers_saved);
    info!("{}", "=".repeat(60));
    info!("\n结果已保存至: {}", output_file.display());
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_text("모범 답안입니다", 4), "모범 답...");
        assert_eq!(truncate_text("short", 10), "short");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
    }

    #[test]
    fn test_log_file_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.txt");
        init_log_file(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("课程文档解析日志"));
    }
}
