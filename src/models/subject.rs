//! 题目（Subject）模型

use std::path::PathBuf;

/// 一道已采集完成的题目：一组通过校验的本地图片
///
/// `index` 是压缩后的最终序号（从 1 开始）：
/// 只在产出了 ≥1 张有效图片的候选之间计数，
/// 空候选不占号。磁盘上的 `savol_{n}` 目录名用的是候选自身的发现序号，
/// 两者可能不同。
#[derive(Debug, Clone)]
pub struct Subject {
    /// 在最终集合中的序号（从 1 开始，压缩序列）
    pub index: usize,
    /// 按页面 DOM 顺序排列的有效图片路径，保证非空
    pub images: Vec<PathBuf>,
}

impl Subject {
    pub fn new(index: usize, images: Vec<PathBuf>) -> Self {
        debug_assert!(!images.is_empty(), "Subject 不允许为空");
        Self { index, images }
    }

    /// 有效图片数量
    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}
