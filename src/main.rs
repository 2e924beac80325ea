use anyhow::{Context, Result};
use opic_question_miner::utils::logging;
use opic_question_miner::{App, Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load().context("加载配置失败")?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let summary = App::initialize(config)
        .context("初始化失败")?
        .run()
        .await
        .context("解析课程文档失败")?;

    if summary.failed_documents > 0 {
        info!("⚠️ 有 {} 个文档处理失败，详见日志", summary.failed_documents);
    }

    Ok(())
}
