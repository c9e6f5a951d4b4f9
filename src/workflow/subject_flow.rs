//! 候选处理流程 - 流程层
//!
//! 核心职责：定义"一个候选链接"的完整处理流程
//!
//! 流程顺序：
//! 1. 导航到题目页（失败 → 整轮运行中止）
//! 2. 固定等待后枚举图片地址
//! 3. 逐张下载 + 校验（失败只丢这张图，不中止）
//! 4. 返回通过校验的图片路径；一张都没有则返回 None

use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::infrastructure::{Navigator, Workspace};
use crate::models::Verdict;
use crate::services::{ImageHarvester, Validator};
use crate::workflow::SubjectCtx;

/// 候选处理流程
pub struct SubjectFlow {
    harvester: ImageHarvester,
    validator: Validator,
}

impl SubjectFlow {
    /// 创建新的流程对象（每轮运行创建一次，循环复用）
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            harvester: ImageHarvester::new(config),
            validator: Validator::new(config)?,
        })
    }

    /// 处理一个候选链接
    ///
    /// # 参数
    /// - `navigator`: 页面导航器
    /// - `workspace`: 工作目录
    /// - `ctx`: 候选上下文
    ///
    /// # 返回
    /// 返回通过校验的图片路径（按 DOM 顺序）；没有任何有效图片时返回 None
    pub async fn run(
        &self,
        navigator: &Navigator,
        workspace: &Workspace,
        ctx: &SubjectCtx,
    ) -> Result<Option<Vec<PathBuf>>> {
        // 1. 导航到题目页，拿到跳转后的实际地址
        let page_url = navigator.open(&ctx.url).await?;

        // 2. 等待渲染后枚举图片地址
        let sources = self.harvester.harvest(navigator, &page_url).await?;
        info!("{} 发现 {} 张图片", ctx, sources.len());

        // 3. 目录按候选序号命名，空目录会留在磁盘上
        let subject_dir = workspace.subject_dir(ctx.candidate_index)?;

        // 4. 逐张下载校验，保持 DOM 顺序
        //    文件名沿用 img 元素自身的序号，被跳过的元素会留下空洞
        let mut accepted = Vec::new();
        for source in &sources {
            let dest = subject_dir.join(format!("img_{}.jpg", source.dom_index));

            match self.validator.validate(&source.url, &dest).await {
                Verdict::Accepted { width, height } => {
                    debug!(
                        "{} ✓ img_{} 通过 ({}x{})",
                        ctx, source.dom_index, width, height
                    );
                    accepted.push(dest);
                }
                Verdict::Rejected(reason) => {
                    debug!("{} ✗ img_{} 被拒: {}", ctx, source.dom_index, reason);
                }
            }
        }

        if accepted.is_empty() {
            Ok(None)
        } else {
            info!("{} ✓ {} 张图片通过校验", ctx, accepted.len());
            Ok(Some(accepted))
        }
    }
}
