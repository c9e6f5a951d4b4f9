//! 采集流水线 - 编排层
//!
//! ## 职责
//!
//! 本模块是一轮运行的入口，负责状态推进和资源管理。
//!
//! ## 运行状态
//!
//! 清空工作目录 → 打开首页 → 发现候选链接 →
//! 逐个候选（导航 → 枚举图片 → 逐张校验）→
//! 关闭浏览器 → 生成 PDF → 生成 ZIP → 返回两个产物路径
//!
//! 导航 / 文件系统 / 脚本错误会让整轮运行中止（浏览器仍会被关闭，
//! 已写入的半成品留在磁盘上，由下一轮的清空步骤处理）；
//! 单张图片的失败只会缩小当前题目的有效集合。

use std::path::PathBuf;
use std::time::Duration;

use chromiumoxide::Browser;
use tracing::{info, warn};

use crate::browser::launch_headless_browser;
use crate::config::Config;
use crate::error::Result;
use crate::infrastructure::{Navigator, Workspace};
use crate::models::Subject;
use crate::services::{ArchiveBuilder, LinkDiscoverer, PdfBuilder};
use crate::utils::logging::{log_run_complete, log_run_start, truncate_text};
use crate::workflow::{SubjectCtx, SubjectFlow};

/// 一轮运行的产物
#[derive(Debug, Clone)]
pub struct HarvestOutput {
    /// PDF 文档路径
    pub document_path: PathBuf,
    /// ZIP 压缩包路径
    pub archive_path: PathBuf,
}

/// 采集流水线
pub struct HarvestPipeline {
    config: Config,
}

impl HarvestPipeline {
    /// 创建新的流水线
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 执行一轮完整采集
    ///
    /// # 参数
    /// - `root_url`: 测试首页的绝对地址（格式校验由调用方负责）
    ///
    /// # 返回
    /// 返回 PDF 和 ZIP 的路径；整轮阻塞到采集结束，没有中间进度接口
    pub async fn run(&self, root_url: &str) -> Result<HarvestOutput> {
        log_run_start(root_url);

        // 工作目录先于一切写入清空重建
        let workspace = Workspace::reset(&self.config.output_dir)?;

        let (mut browser, page) = launch_headless_browser(&self.config).await?;
        let navigator = Navigator::new(
            page,
            Duration::from_secs(self.config.navigation_timeout_secs),
        );

        // 采集阶段的任何结局都必须先关浏览器，再决定成败
        let harvested = self.harvest_subjects(&navigator, &workspace, root_url).await;
        close_browser(&mut browser).await;
        let subjects = harvested?;

        // 两个汇编器消费同一份有序集合
        let document_path = PdfBuilder::new().build(&subjects, &workspace.document_path())?;
        let archive_path = ArchiveBuilder::new().build(&subjects, &workspace)?;

        log_run_complete(&subjects, &document_path, &archive_path);

        Ok(HarvestOutput {
            document_path,
            archive_path,
        })
    }

    /// 发现并逐个处理候选链接
    async fn harvest_subjects(
        &self,
        navigator: &Navigator,
        workspace: &Workspace,
        root_url: &str,
    ) -> Result<Vec<Subject>> {
        // 首页跳转后的实际地址是相对链接的解析基准
        let base_url = navigator.open(root_url).await?;

        let discoverer = LinkDiscoverer::new(&self.config);
        let candidates = discoverer.discover(navigator, &base_url).await?;
        info!("🔗 首页发现 {} 个候选链接", candidates.len());

        // 流程对象只创建一次，循环复用
        let flow = SubjectFlow::new(&self.config)?;

        let mut subjects = Vec::new();
        for candidate in &candidates {
            let ctx = SubjectCtx::new(
                candidate.discovery_index,
                candidates.len(),
                candidate.url.clone(),
            );
            info!("{} 开始处理: {}", ctx, truncate_text(&candidate.url, 80));

            match flow.run(navigator, workspace, &ctx).await? {
                // 最终序号是压缩序：空候选不占号
                Some(images) => subjects.push(Subject::new(subjects.len() + 1, images)),
                None => info!("{} 没有有效图片，跳过", ctx),
            }
        }

        Ok(subjects)
    }
}

/// 关闭浏览器会话（成功和失败路径都要走到）
async fn close_browser(browser: &mut Browser) {
    if let Err(e) = browser.close().await {
        warn!("⚠️ 关闭浏览器失败: {}", e);
    }
    let _ = browser.wait().await;
}
