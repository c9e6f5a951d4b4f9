//! 单张图片的校验结论
//!
//! 拒绝原因带标签，调用方可以区分抓取失败 / 解码失败 / 尺寸不足，
//! 但当前流水线对三者的处理是一致的：删除文件、跳过这张图。

use std::fmt;

/// 校验结论
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// 图片通过最小尺寸门槛，文件保留在磁盘上
    Accepted { width: u32, height: u32 },
    /// 图片被拒绝，文件已从工作目录删除
    Rejected(RejectReason),
}

/// 拒绝原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// HTTP 抓取或写盘失败
    Fetch(String),
    /// 无法按图片格式解码
    Decode(String),
    /// 尺寸低于门槛
    TooSmall { width: u32, height: u32 },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Fetch(msg) => write!(f, "抓取失败: {}", msg),
            RejectReason::Decode(msg) => write!(f, "解码失败: {}", msg),
            RejectReason::TooSmall { width, height } => {
                write!(f, "尺寸不足: {}x{}", width, height)
            }
        }
    }
}
