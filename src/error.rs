//! 错误类型定义
//!
//! 只有导航级和文件系统级的错误会穿过流水线边界；
//! 单张图片的抓取/解码失败在 Validator 内部吸收（见 `models::Verdict`），
//! 永远不会出现在这里。

use thiserror::Error;

/// 采集流水线错误类型
#[derive(Debug, Error)]
pub enum HarvestError {
    /// 启动无头浏览器失败
    #[error("启动无头浏览器失败: {0}")]
    BrowserLaunch(String),

    /// HTTP 客户端初始化失败
    #[error("HTTP 客户端初始化失败: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// 页面导航失败
    #[error("导航到 {url} 失败: {source}")]
    Navigation {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// 页面加载超时
    #[error("导航到 {url} 超时 ({timeout_secs} 秒)")]
    NavigationTimeout { url: String, timeout_secs: u64 },

    /// 页面脚本执行失败
    #[error("页面脚本执行失败: {0}")]
    Script(#[from] chromiumoxide::error::CdpError),

    /// DOM 扫描结果反序列化失败
    #[error("DOM 数据解析失败: {0}")]
    DomParse(#[from] serde_json::Error),

    /// URL 解析失败
    #[error("URL 解析失败 ({value}): {source}")]
    UrlParse {
        value: String,
        source: url::ParseError,
    },

    /// 工作目录或输出文件操作失败
    #[error("文件操作失败 ({path}): {source}")]
    Filesystem {
        path: String,
        source: std::io::Error,
    },

    /// PDF 文档生成失败
    #[error("PDF 生成失败: {0}")]
    PdfBuild(Box<dyn std::error::Error + Send + Sync>),

    /// ZIP 压缩包生成失败
    #[error("ZIP 生成失败: {0}")]
    ArchiveBuild(#[source] zip::result::ZipError),
}

// ========== 便捷构造函数 ==========

impl HarvestError {
    /// 创建导航失败错误
    pub fn navigation(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        HarvestError::Navigation {
            url: url.into(),
            source: Box::new(source),
        }
    }

    /// 创建文件操作失败错误
    pub fn filesystem(path: impl Into<String>, source: std::io::Error) -> Self {
        HarvestError::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// 创建 URL 解析失败错误
    pub fn url_parse(value: impl Into<String>, source: url::ParseError) -> Self {
        HarvestError::UrlParse {
            value: value.into(),
            source,
        }
    }
}

/// 流水线结果类型别名
pub type Result<T> = std::result::Result<T, HarvestError>;
