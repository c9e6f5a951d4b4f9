//! 汇编器一致性测试
//!
//! PDF 和 ZIP 消费的是同一份有序题目集合，
//! 两个产物引用的图片必须完全一致，分页必须按题分组。
//! 不需要浏览器和网络，直接对准备好的集合跑两个汇编器。

use std::collections::HashSet;
use std::fs::File;
use std::path::PathBuf;

use savol_harvest::services::{ArchiveBuilder, PdfBuilder};
use savol_harvest::{Subject, Workspace};

/// 准备两道题、每道两张 300x300 有效图片的集合
///
/// 对应"首页两个候选，每页三张图、其中 50x50 的一张已被校验删除"的
/// 典型站点形态：最终集合是 2 道题 × 2 张图。
fn prepare_subjects(workspace: &Workspace) -> Vec<Subject> {
    let mut subjects = Vec::new();

    for candidate in 1..=2 {
        let dir = workspace.subject_dir(candidate).unwrap();
        let images: Vec<PathBuf> = (1..=2)
            .map(|i| {
                let path = dir.join(format!("img_{}.jpg", i));
                image::RgbImage::new(300, 300).save(&path).unwrap();
                path
            })
            .collect();
        subjects.push(Subject::new(candidate, images));
    }

    subjects
}

#[test]
fn test_archive_entries_match_document_images() {
    let tmp = tempfile::tempdir().unwrap();
    let workspace = Workspace::reset(tmp.path().join("output")).unwrap();
    let subjects = prepare_subjects(&workspace);

    let document_path = PdfBuilder::new()
        .build(&subjects, &workspace.document_path())
        .unwrap();
    let archive_path = ArchiveBuilder::new().build(&subjects, &workspace).unwrap();

    // ZIP 条目集合 == 交给 PDF 的图片集合
    let mut archive = zip::ZipArchive::new(File::open(&archive_path).unwrap()).unwrap();
    let entries: HashSet<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    let referenced: HashSet<String> = subjects
        .iter()
        .flat_map(|s| s.images.iter())
        .map(|p| workspace.entry_name(p))
        .collect();

    assert_eq!(entries, referenced);
    assert_eq!(entries.len(), 4);
    assert!(document_path.exists());
}

#[test]
fn test_document_pages_follow_subject_grouping() {
    let tmp = tempfile::tempdir().unwrap();
    let workspace = Workspace::reset(tmp.path().join("output")).unwrap();
    let subjects = prepare_subjects(&workspace);

    let document_path = PdfBuilder::new()
        .build(&subjects, &workspace.document_path())
        .unwrap();

    // 300x300 缩放到 500x500 点后一页只放得下一张：
    // 每道题两页，题与题之间强制换页，最后还有一页空白尾页 → 共 5 页
    let document = lopdf::Document::load(&document_path).unwrap();
    assert_eq!(document.get_pages().len(), 5);
}
