//! PDF 排版服务 - 业务能力层
//!
//! 把所有题目的有效图片排进一份 A4 文档：
//! - 每张图按比例缩放到 500×700 点的边界框内（小图会被放大）
//! - 相邻图片之间留固定间距，放不下时顺延到下一页
//! - 每道题结束后强制换页，最后一道题之后也换，
//!   所以文档末尾会多一页空白（沿用既有分页行为）

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::{Image as PdfImage, ImageTransform, Mm, PdfDocument};
use tracing::{debug, info};

use crate::error::{HarvestError, Result};
use crate::models::Subject;

/// A4 页面尺寸（毫米）
const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
/// 四周页边距（毫米）
const MARGIN_MM: f64 = 20.0;
/// 图片缩放边界框（点）
const MAX_IMAGE_WIDTH_PT: f64 = 500.0;
const MAX_IMAGE_HEIGHT_PT: f64 = 700.0;
/// 相邻图片之间的间距（点）
const IMAGE_SPACING_PT: f64 = 12.0;
/// 点到毫米的换算
const PT_TO_MM: f64 = 25.4 / 72.0;

/// PDF 排版服务
pub struct PdfBuilder;

impl PdfBuilder {
    /// 创建新的排版服务
    pub fn new() -> Self {
        Self
    }

    /// 把题目集合排版成一份 PDF
    ///
    /// # 参数
    /// - `subjects`: 压缩序后的题目集合（按发现顺序）
    /// - `output`: 输出文件路径
    ///
    /// # 返回
    /// 返回写好的文件路径
    pub fn build(&self, subjects: &[Subject], output: &Path) -> Result<PathBuf> {
        let (doc, first_page, first_layer) = PdfDocument::new(
            "Savollar",
            Mm(PAGE_WIDTH_MM as f32),
            Mm(PAGE_HEIGHT_MM as f32),
            "rasmlar",
        );
        let mut layer = doc.get_page(first_page).get_layer(first_layer);
        let mut cursor_mm = PAGE_HEIGHT_MM - MARGIN_MM;

        for subject in subjects {
            debug!(
                "排版第 {} 题（{} 张图片）",
                subject.index,
                subject.image_count()
            );

            for image_path in &subject.images {
                let dyn_img = image::open(image_path)
                    .map_err(|e| HarvestError::PdfBuild(Box::new(e)))?;
                let (width, height) = (dyn_img.width(), dyn_img.height());

                let ratio = (MAX_IMAGE_WIDTH_PT / width as f64)
                    .min(MAX_IMAGE_HEIGHT_PT / height as f64);
                let draw_height_mm = height as f64 * ratio * PT_TO_MM;

                // 本页放不下就换页（空页顶端除外，单图不会超过一页）
                if cursor_mm - draw_height_mm < MARGIN_MM
                    && cursor_mm < PAGE_HEIGHT_MM - MARGIN_MM
                {
                    let (page, page_layer) =
                        doc.add_page(Mm(PAGE_WIDTH_MM as f32), Mm(PAGE_HEIGHT_MM as f32), "rasmlar");
                    layer = doc.get_page(page).get_layer(page_layer);
                    cursor_mm = PAGE_HEIGHT_MM - MARGIN_MM;
                }

                // 带透明通道的图片展平成 RGB 再嵌入
                let rgb = image::DynamicImage::ImageRgb8(dyn_img.to_rgb8());
                let pdf_image = PdfImage::from_dynamic_image(&rgb);
                pdf_image.add_to_layer(
                    layer.clone(),
                    ImageTransform {
                        translate_x: Some(Mm(MARGIN_MM as f32)),
                        translate_y: Some(Mm((cursor_mm - draw_height_mm) as f32)),
                        scale_x: Some(ratio as f32),
                        scale_y: Some(ratio as f32),
                        // dpi 72 让像素按"点"计数，缩放系数即点比例
                        dpi: Some(72.0),
                        ..Default::default()
                    },
                );

                cursor_mm -= draw_height_mm + IMAGE_SPACING_PT * PT_TO_MM;
            }

            // 每道题之后强制换页（包括最后一道）
            let (page, page_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM as f32), Mm(PAGE_HEIGHT_MM as f32), "rasmlar");
            layer = doc.get_page(page).get_layer(page_layer);
            cursor_mm = PAGE_HEIGHT_MM - MARGIN_MM;
        }

        let file = File::create(output)
            .map_err(|e| HarvestError::filesystem(output.display().to_string(), e))?;
        doc.save(&mut BufWriter::new(file))
            .map_err(|e| HarvestError::PdfBuild(Box::new(e)))?;

        info!("📄 PDF 已生成: {}", output.display());
        Ok(output.to_path_buf())
    }
}

impl Default for PdfBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 生成一张高瘦图片，缩放后恰好独占一页
    fn write_tall_png(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        image::RgbImage::new(100, 1000).save(&path).unwrap();
        path
    }

    fn page_count(path: &Path) -> usize {
        lopdf::Document::load(path).unwrap().get_pages().len()
    }

    #[test]
    fn test_empty_collection_yields_single_blank_page() {
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join("questions.pdf");

        PdfBuilder::new().build(&[], &output).unwrap();

        assert!(output.exists());
        assert_eq!(page_count(&output), 1);
    }

    #[test]
    fn test_trailing_page_break_after_last_subject() {
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join("questions.pdf");

        let subject = Subject::new(1, vec![write_tall_png(tmp.path(), "img_1.png")]);
        PdfBuilder::new().build(&[subject], &output).unwrap();

        // 一页内容 + 一页强制换页留下的空白尾页
        assert_eq!(page_count(&output), 2);
    }

    #[test]
    fn test_each_subject_starts_on_a_fresh_page() {
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join("questions.pdf");

        let subjects = vec![
            Subject::new(1, vec![write_tall_png(tmp.path(), "img_1.png")]),
            Subject::new(2, vec![write_tall_png(tmp.path(), "img_2.png")]),
        ];
        PdfBuilder::new().build(&subjects, &output).unwrap();

        // 每题各占一页，外加空白尾页
        assert_eq!(page_count(&output), 3);
    }

    #[test]
    fn test_overflow_images_continue_on_next_page() {
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join("questions.pdf");

        // 两张缩放后各接近整页高的图片塞进同一道题
        let subject = Subject::new(
            1,
            vec![
                write_tall_png(tmp.path(), "img_1.png"),
                write_tall_png(tmp.path(), "img_2.png"),
            ],
        );
        PdfBuilder::new().build(&[subject], &output).unwrap();

        // 两页内容 + 空白尾页
        assert_eq!(page_count(&output), 3);
    }
}
