use savol_harvest::browser::launch_headless_browser;
use savol_harvest::utils::logging;
use savol_harvest::{Config, HarvestPipeline, Navigator};
use std::time::Duration;

/// 从环境变量取目标首页地址
fn target_url() -> String {
    std::env::var("HARVEST_URL").unwrap_or_else(|_| "https://test-uz.ru/".to_string())
}

#[tokio::test]
#[ignore] // 默认忽略，需要手动运行：cargo test -- --ignored
async fn test_browser_launch() {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(&config);

    // 测试无头浏览器启动
    let result = launch_headless_browser(&config).await;

    assert!(result.is_ok(), "应该能够成功启动无头浏览器");

    let (mut browser, _page) = result.unwrap();
    let _ = browser.close().await;
    let _ = browser.wait().await;
}

#[tokio::test]
#[ignore]
async fn test_navigation_returns_resolved_url() {
    let config = Config::from_env();
    logging::init(&config);

    let (mut browser, page) = launch_headless_browser(&config)
        .await
        .expect("启动浏览器失败");
    let navigator = Navigator::new(page, Duration::from_secs(config.navigation_timeout_secs));

    let resolved = navigator.open(&target_url()).await.expect("导航失败");
    assert!(resolved.starts_with("http"), "应该返回跳转后的绝对地址");

    let _ = browser.close().await;
    let _ = browser.wait().await;
}

#[tokio::test]
#[ignore]
async fn test_full_pipeline_run() {
    let config = Config::from_env();
    logging::init(&config);

    let output_dir = config.output_dir.clone();
    let pipeline = HarvestPipeline::new(config);

    // 整轮采集：首页 → 候选链接 → 图片校验 → PDF + ZIP
    let output = pipeline.run(&target_url()).await.expect("采集失败");

    assert!(output.document_path.exists(), "PDF 应该已生成");
    assert!(output.archive_path.exists(), "ZIP 应该已生成");
    assert!(output.document_path.starts_with(&output_dir));
    assert!(output.archive_path.starts_with(&output_dir));
}

#[tokio::test]
#[ignore]
async fn test_unreachable_root_fails_without_outputs() {
    let config = Config::from_env();
    logging::init(&config);

    let workspace_root = config.output_dir.clone();
    let pipeline = HarvestPipeline::new(config);

    // 首页不可达 → 导航错误中止整轮，不产出任何文件
    let result = pipeline.run("http://127.0.0.1:1/").await;
    assert!(result.is_err(), "首页不可达时运行应该失败");

    let root = std::path::Path::new(&workspace_root);
    assert!(!root.join("questions.pdf").exists());
    assert!(!root.join("images.zip").exists());
}

#[tokio::test]
#[ignore]
async fn test_sequential_runs_leave_only_second_outputs() {
    let config = Config::from_env();
    logging::init(&config);

    let pipeline = HarvestPipeline::new(config);

    // 两轮顺序运行：工作目录里只应剩第二轮的产物
    let first = pipeline.run(&target_url()).await.expect("第一轮采集失败");
    let second = pipeline.run(&target_url()).await.expect("第二轮采集失败");

    assert!(second.document_path.exists());
    assert!(second.archive_path.exists());
    // 两轮路径相同：第二轮覆盖第一轮
    assert_eq!(first.document_path, second.document_path);
    assert_eq!(first.archive_path, second.archive_path);
}
