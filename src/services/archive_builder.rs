//! ZIP 打包服务 - 业务能力层
//!
//! 把所有题目的有效图片打进一个 deflate 压缩包，
//! 条目名用相对工作目录的路径（`savol_{n}/img_{m}.jpg`），
//! 保留按题分组的目录结构。

use std::fs::File;
use std::io;
use std::path::PathBuf;

use tracing::{debug, info};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{HarvestError, Result};
use crate::infrastructure::Workspace;
use crate::models::Subject;

/// ZIP 打包服务
pub struct ArchiveBuilder;

impl ArchiveBuilder {
    /// 创建新的打包服务
    pub fn new() -> Self {
        Self
    }

    /// 把题目集合打包成 ZIP
    ///
    /// # 参数
    /// - `subjects`: 压缩序后的题目集合（按发现顺序）
    /// - `workspace`: 工作目录（决定输出路径和条目名）
    ///
    /// # 返回
    /// 返回写好的压缩包路径
    pub fn build(&self, subjects: &[Subject], workspace: &Workspace) -> Result<PathBuf> {
        let output = workspace.archive_path();
        let file = File::create(&output)
            .map_err(|e| HarvestError::filesystem(output.display().to_string(), e))?;

        let mut zip = ZipWriter::new(file);
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        for subject in subjects {
            for image_path in &subject.images {
                let entry = workspace.entry_name(image_path);
                debug!("压缩: {}", entry);

                zip.start_file(entry, options)
                    .map_err(HarvestError::ArchiveBuild)?;
                let mut src = File::open(image_path)
                    .map_err(|e| HarvestError::filesystem(image_path.display().to_string(), e))?;
                io::copy(&mut src, &mut zip)
                    .map_err(|e| HarvestError::filesystem(output.display().to_string(), e))?;
            }
        }

        zip.finish().map_err(HarvestError::ArchiveBuild)?;

        info!("🗜️ ZIP 已生成: {}", output.display());
        Ok(output)
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}
