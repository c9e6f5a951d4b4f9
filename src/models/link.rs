//! 候选链接模型

/// 首页上发现的一条题目候选链接
///
/// 只有 URL 字符串本身，没有其他标识；
/// 同一 URL 被多个锚点命中时不做去重，重复保留。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateLink {
    /// 发现顺序（从 1 开始，按首页锚点的 DOM 顺序）
    pub discovery_index: usize,
    /// 解析后的绝对 URL
    pub url: String,
}

impl CandidateLink {
    pub fn new(discovery_index: usize, url: impl Into<String>) -> Self {
        Self {
            discovery_index,
            url: url.into(),
        }
    }
}
