/// 日志工具模块
///
/// 提供日志初始化和输出格式化的辅助函数
use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::models::Subject;

/// 初始化日志订阅器
///
/// RUST_LOG 优先；未设置时按配置落到 info 或 debug
pub fn init(config: &Config) {
    let default_level = if config.verbose_logging { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 记录一轮运行的开始信息
pub fn log_run_start(root_url: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 开始采集 - {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("🌐 目标首页: {}", truncate_text(root_url, 80));
    info!("{}", "=".repeat(60));
}

/// 记录一轮运行的最终统计
pub fn log_run_complete(subjects: &[Subject], document_path: &Path, archive_path: &Path) {
    let image_total: usize = subjects.iter().map(|s| s.image_count()).sum();

    info!("\n{}", "=".repeat(60));
    info!("📊 采集完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 题目: {} 道, 图片: {} 张", subjects.len(), image_total);
    info!("📄 PDF: {}", document_path.display());
    info!("🗜️ ZIP: {}", archive_path.display());
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
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
