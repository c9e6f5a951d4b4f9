//! 候选处理上下文
//!
//! 封装"我正在处理首页上的第几个候选链接"这一信息

use std::fmt::Display;

/// 候选处理上下文
#[derive(Debug, Clone)]
pub struct SubjectCtx {
    /// 候选在首页上的发现序号（从 1 开始，空候选也占号）
    pub candidate_index: usize,

    /// 候选总数（仅用于日志显示）
    pub candidate_total: usize,

    /// 候选的绝对地址
    pub url: String,
}

impl SubjectCtx {
    /// 创建新的候选上下文
    pub fn new(candidate_index: usize, candidate_total: usize, url: String) -> Self {
        Self {
            candidate_index,
            candidate_total,
            url,
        }
    }
}

impl Display for SubjectCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[savol {}/{}]", self.candidate_index, self.candidate_total)
    }
}
