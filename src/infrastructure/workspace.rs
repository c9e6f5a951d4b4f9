//! 工作目录 - 基础设施层
//!
//! 单次运行的输出根目录。约定：
//! - 每次运行开始时整体清空重建，上一轮的产物全部丢弃
//! - 单写者假设，不做并发隔离（并发互斥由外部保证）

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{HarvestError, Result};

/// PDF 文档在工作目录内的固定文件名
const DOCUMENT_FILE: &str = "questions.pdf";
/// ZIP 压缩包在工作目录内的固定文件名
const ARCHIVE_FILE: &str = "images.zip";

/// 工作目录
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// 清空并重建工作目录
    ///
    /// 必须在任何写入之前调用；目录已存在时先整体删除。
    pub fn reset(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if root.exists() {
            debug!("清空旧的工作目录: {}", root.display());
            fs::remove_dir_all(&root)
                .map_err(|e| HarvestError::filesystem(root.display().to_string(), e))?;
        }
        fs::create_dir_all(&root)
            .map_err(|e| HarvestError::filesystem(root.display().to_string(), e))?;

        info!("📁 工作目录就绪: {}", root.display());
        Ok(Self { root })
    }

    /// 工作目录根路径
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 创建并返回第 n 个候选的图片目录（`savol_{n}`）
    ///
    /// 目录按候选自身的发现序号命名，采集后为空的目录会留在磁盘上。
    pub fn subject_dir(&self, candidate_index: usize) -> Result<PathBuf> {
        let dir = self.root.join(format!("savol_{}", candidate_index));
        fs::create_dir_all(&dir)
            .map_err(|e| HarvestError::filesystem(dir.display().to_string(), e))?;
        Ok(dir)
    }

    /// PDF 文档的输出路径
    pub fn document_path(&self) -> PathBuf {
        self.root.join(DOCUMENT_FILE)
    }

    /// ZIP 压缩包的输出路径
    pub fn archive_path(&self) -> PathBuf {
        self.root.join(ARCHIVE_FILE)
    }

    /// 把图片路径转成压缩包条目名（相对根目录，统一用 `/` 分隔）
    pub fn entry_name(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// 尽力删除一个被拒绝的文件（失败只记日志，不影响流程）
    pub fn discard(path: &Path) {
        if let Err(e) = fs::remove_file(path) {
            debug!("删除文件失败 ({}): {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_clears_previous_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("output");

        // 第一轮：写入一些残留文件
        let ws = Workspace::reset(&root).unwrap();
        let dir = ws.subject_dir(1).unwrap();
        fs::write(dir.join("img_1.jpg"), b"stale").unwrap();
        fs::write(ws.document_path(), b"stale pdf").unwrap();

        // 第二轮：重建后目录必须只剩下空根
        let ws = Workspace::reset(&root).unwrap();
        assert!(ws.root().exists());
        assert_eq!(fs::read_dir(ws.root()).unwrap().count(), 0);
    }

    #[test]
    fn test_fixed_output_paths() {
        let tmp = tempfile::tempdir().unwrap();
        let ws = Workspace::reset(tmp.path().join("output")).unwrap();

        assert!(ws.document_path().ends_with("questions.pdf"));
        assert!(ws.archive_path().ends_with("images.zip"));
    }

    #[test]
    fn test_subject_dir_naming() {
        let tmp = tempfile::tempdir().unwrap();
        let ws = Workspace::reset(tmp.path().join("output")).unwrap();

        let dir = ws.subject_dir(3).unwrap();
        assert!(dir.ends_with("savol_3"));
        assert!(dir.is_dir());
    }

    #[test]
    fn test_entry_name_is_workspace_relative() {
        let tmp = tempfile::tempdir().unwrap();
        let ws = Workspace::reset(tmp.path().join("output")).unwrap();

        let dir = ws.subject_dir(2).unwrap();
        let name = ws.entry_name(&dir.join("img_5.jpg"));
        assert_eq!(name, "savol_2/img_5.jpg");
    }
}
