//! 业务能力层
//!
//! 每个服务只描述"我能做什么"，只处理单个对象，不关心流程顺序：
//! - `LinkDiscoverer` - 从首页找题目链接
//! - `ImageHarvester` - 从题目页枚举图片地址
//! - `Validator` - 下载单张图片并做尺寸校验
//! - `PdfBuilder` - 把有效图片排版成 PDF
//! - `ArchiveBuilder` - 把有效图片打包成 ZIP

pub mod archive_builder;
pub mod image_harvester;
pub mod link_discoverer;
pub mod pdf_builder;
pub mod validator;

pub use archive_builder::ArchiveBuilder;
pub use image_harvester::ImageHarvester;
pub use link_discoverer::LinkDiscoverer;
pub use pdf_builder::PdfBuilder;
pub use validator::Validator;
