//! 图片校验服务 - 业务能力层
//!
//! 只负责"下载一张图片并做尺寸校验"能力，不关心流程。
//! 任何失败都在这里吸收成 `Verdict::Rejected`，不会让整轮运行中止。

use std::fs;
use std::path::Path;
use std::time::Duration;

use tracing::debug;

use crate::config::Config;
use crate::error::{HarvestError, Result};
use crate::infrastructure::Workspace;
use crate::models::{RejectReason, Verdict};

/// 图片校验服务
///
/// 职责：
/// - 按 URL 下载图片字节并写入目标路径（带超时）
/// - 按图片格式读取尺寸，和最小门槛比较（含边界）
/// - 被拒绝的文件立即删除，只留下结论
pub struct Validator {
    client: reqwest::Client,
    min_width: u32,
    min_height: u32,
}

impl Validator {
    /// 创建新的校验服务
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()
            .map_err(HarvestError::HttpClient)?;

        Ok(Self {
            client,
            min_width: config.min_image_width,
            min_height: config.min_image_height,
        })
    }

    /// 下载并校验一张图片
    ///
    /// # 参数
    /// - `image_url`: 图片绝对地址
    /// - `dest`: 工作目录内的目标路径
    ///
    /// # 返回
    /// 接受时文件保留在 `dest`；拒绝时文件已删除，结论里带拒绝原因
    pub async fn validate(&self, image_url: &str, dest: &Path) -> Verdict {
        if let Err(e) = self.fetch_to_file(image_url, dest).await {
            debug!("下载失败 ({}): {}", image_url, e);
            // 写了一半的文件也要清掉
            Workspace::discard(dest);
            return Verdict::Rejected(RejectReason::Fetch(e.to_string()));
        }

        self.inspect_file(dest)
    }

    /// 抓取图片字节并写入目标路径
    async fn fetch_to_file(&self, url: &str, dest: &Path) -> anyhow::Result<()> {
        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        fs::write(dest, &bytes)?;
        Ok(())
    }

    /// 读取已落盘文件的尺寸并做门槛判断
    ///
    /// 和下载拆开，方便单独测试边界值。
    fn inspect_file(&self, path: &Path) -> Verdict {
        match read_dimensions(path) {
            Ok((width, height)) if width >= self.min_width && height >= self.min_height => {
                Verdict::Accepted { width, height }
            }
            Ok((width, height)) => {
                Workspace::discard(path);
                Verdict::Rejected(RejectReason::TooSmall { width, height })
            }
            Err(e) => {
                Workspace::discard(path);
                Verdict::Rejected(RejectReason::Decode(e))
            }
        }
    }
}

/// 按文件内容识别格式并读出像素尺寸
///
/// 下载的文件统一叫 `img_{n}.jpg`，实际内容可能是 PNG 等其他格式，
/// 所以必须按内容嗅探，不能信扩展名。
fn read_dimensions(path: &Path) -> std::result::Result<(u32, u32), String> {
    image::io::Reader::open(path)
        .map_err(|e| e.to_string())?
        .with_guessed_format()
        .map_err(|e| e.to_string())?
        .into_dimensions()
        .map_err(|e| e.to_string())
}
