//! 题目链接发现服务 - 业务能力层
//!
//! 只负责"从已加载的首页找出题目链接"能力，不关心流程

use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::error::{HarvestError, Result};
use crate::infrastructure::Navigator;
use crate::models::CandidateLink;
use crate::utils::logging::truncate_text;

/// 按 DOM 顺序收集所有锚点的可见文本和 href
const ANCHOR_SCAN_JS: &str = r#"
    Array.from(document.querySelectorAll('a')).map(a => ({
        text: a.innerText || '',
        href: a.getAttribute('href')
    }))
"#;

/// 首页扫描出的单个锚点
#[derive(Debug, Deserialize)]
pub struct AnchorNode {
    pub text: String,
    pub href: Option<String>,
}

/// 题目链接发现服务
///
/// 职责：
/// - 扫描当前已加载的首页
/// - 锚文本（小写）包含标记子串且 href 非空的锚点视为候选
/// - 把 href 解析成相对首页实际地址的绝对 URL
/// - 保持 DOM 顺序，重复链接不去重
pub struct LinkDiscoverer {
    marker: String,
}

impl LinkDiscoverer {
    /// 创建新的链接发现服务
    pub fn new(config: &Config) -> Self {
        Self {
            marker: config.question_marker.to_lowercase(),
        }
    }

    /// 在当前加载的首页上发现候选链接
    ///
    /// # 参数
    /// - `navigator`: 页面导航器（首页必须已加载）
    /// - `base_url`: 首页跳转后的实际地址，用于解析相对链接
    pub async fn discover(
        &self,
        navigator: &Navigator,
        base_url: &str,
    ) -> Result<Vec<CandidateLink>> {
        let anchors: Vec<AnchorNode> = navigator.eval_as(ANCHOR_SCAN_JS).await?;
        debug!("首页共扫描到 {} 个锚点", anchors.len());

        let base = Url::parse(base_url).map_err(|e| HarvestError::url_parse(base_url, e))?;
        Ok(self.filter_candidates(anchors, &base))
    }

    /// 从锚点列表中筛选候选链接（纯逻辑，便于测试）
    fn filter_candidates(&self, anchors: Vec<AnchorNode>, base: &Url) -> Vec<CandidateLink> {
        let mut candidates = Vec::new();

        for anchor in anchors {
            if !anchor.text.to_lowercase().contains(&self.marker) {
                continue;
            }
            let Some(href) = anchor.href.filter(|h| !h.is_empty()) else {
                continue;
            };
            match base.join(&href) {
                Ok(resolved) => {
                    debug!(
                        "发现候选链接 #{}: {}",
                        candidates.len() + 1,
                        truncate_text(resolved.as_str(), 80)
                    );
                    candidates.push(CandidateLink::new(candidates.len() + 1, resolved));
                }
                Err(e) => warn!("⚠️ 无法解析链接 '{}': {}", href, e),
            }
        }

        candidates
    }
}
