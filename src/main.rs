use anyhow::{Context, Result};
use tracing::info;

use savol_harvest::{Config, HarvestPipeline};
use savol_harvest::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(&config);

    // 首页地址由调用方提供，这里只要求参数存在
    let root_url = std::env::args()
        .nth(1)
        .context("用法: savol_harvest <测试首页 URL>")?;

    // 执行一轮采集
    let output = HarvestPipeline::new(config).run(&root_url).await?;

    info!("✅ 产物已就绪:");
    info!("   {}", output.document_path.display());
    info!("   {}", output.archive_path.display());

    Ok(())
}
