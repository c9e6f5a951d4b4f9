//! 图片枚举服务 - 业务能力层
//!
//! 只负责"从已加载的题目页枚举图片地址"能力，不关心流程

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::error::{HarvestError, Result};
use crate::infrastructure::Navigator;

/// 按 DOM 顺序收集所有图片元素的 src
const IMAGE_SCAN_JS: &str = r#"
    Array.from(document.querySelectorAll('img')).map(img => ({
        src: img.getAttribute('src')
    }))
"#;

/// 题目页扫描出的单个图片元素
#[derive(Debug, Deserialize)]
pub struct ImageNode {
    pub src: Option<String>,
}

/// 题目页上一张可下载的图片
///
/// `dom_index` 按页面上全部 img 元素计数（从 1 开始），
/// 空 src 的元素也占号，所以落盘文件名可能有空洞
/// （`img_2.jpg` 存在而 `img_1.jpg` 不存在）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    /// img 元素在页面上的序号（从 1 开始）
    pub dom_index: usize,
    /// 解析后的绝对地址
    pub url: String,
}

/// 图片枚举服务
///
/// 职责：
/// - 导航完成后固定等待一段时间，给延迟渲染留出余地
///   （这是启发式，不是就绪信号）
/// - 按 DOM 顺序枚举 img 元素，src 非空者保留
/// - 把 src 解析成相对题目页地址的绝对 URL
pub struct ImageHarvester {
    settle_delay: Duration,
}

impl ImageHarvester {
    /// 创建新的图片枚举服务
    pub fn new(config: &Config) -> Self {
        Self {
            settle_delay: Duration::from_millis(config.settle_delay_ms),
        }
    }

    /// 在当前加载的题目页上枚举图片地址
    ///
    /// # 参数
    /// - `navigator`: 页面导航器（题目页必须已加载）
    /// - `page_url`: 题目页跳转后的实际地址，用于解析相对 src
    pub async fn harvest(&self, navigator: &Navigator, page_url: &str) -> Result<Vec<ImageSource>> {
        // 等待延迟渲染
        tokio::time::sleep(self.settle_delay).await;

        let nodes: Vec<ImageNode> = navigator.eval_as(IMAGE_SCAN_JS).await?;
        debug!("页面共扫描到 {} 个图片元素", nodes.len());

        let base = Url::parse(page_url).map_err(|e| HarvestError::url_parse(page_url, e))?;
        Ok(resolve_sources(nodes, &base))
    }
}

/// 解析图片元素的 src（纯逻辑，便于测试）
///
/// 序号跟着 DOM 元素走，被跳过的元素也消耗序号。
fn resolve_sources(nodes: Vec<ImageNode>, base: &Url) -> Vec<ImageSource> {
    let mut sources = Vec::new();

    for (index, node) in nodes.into_iter().enumerate() {
        let Some(src) = node.src.filter(|s| !s.is_empty()) else {
            continue;
        };
        match base.join(&src) {
            Ok(resolved) => sources.push(ImageSource {
                dom_index: index + 1,
                url: resolved.into(),
            }),
            Err(e) => warn!("⚠️ 无法解析图片地址 '{}': {}", src, e),
        }
    }

    sources
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(src: Option<&str>) -> ImageNode {
        ImageNode {
            src: src.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_src_is_skipped() {
        let base = Url::parse("https://test-uz.ru/q/1").unwrap();
        let sources = resolve_sources(vec![node(None), node(Some(""))], &base);
        assert!(sources.is_empty());
    }

    #[test]
    fn test_dom_order_is_preserved() {
        let base = Url::parse("https://test-uz.ru/q/1").unwrap();
        let sources = resolve_sources(
            vec![
                node(Some("/media/b.png")),
                node(Some("/media/a.png")),
                node(Some("https://cdn.test-uz.ru/c.jpg")),
            ],
            &base,
        );

        assert_eq!(
            sources.iter().map(|s| s.url.as_str()).collect::<Vec<_>>(),
            vec![
                "https://test-uz.ru/media/b.png",
                "https://test-uz.ru/media/a.png",
                "https://cdn.test-uz.ru/c.jpg",
            ]
        );
    }

    #[test]
    fn test_skipped_elements_still_consume_dom_indices() {
        let base = Url::parse("https://test-uz.ru/q/1").unwrap();
        let sources = resolve_sources(
            vec![
                node(None),
                node(Some("/media/a.png")),
                node(Some("")),
                node(Some("/media/b.png")),
            ],
            &base,
        );

        // 第 1、3 个元素没有 src：序号 2 和 4 保留，文件名会出现空洞
        assert_eq!(
            sources.iter().map(|s| s.dom_index).collect::<Vec<_>>(),
            vec![2, 4]
        );
    }
}
