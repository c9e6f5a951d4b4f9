/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 输出工作目录（每次运行前会被清空重建）
    pub output_dir: String,
    /// 识别题目链接的标记子串（对锚文本做小写包含匹配）
    pub question_marker: String,
    /// 图片最小宽度（像素，含边界）
    pub min_image_width: u32,
    /// 图片最小高度（像素，含边界）
    pub min_image_height: u32,
    /// 题目页导航后的固定等待时间（毫秒，等待延迟渲染）
    pub settle_delay_ms: u64,
    /// 页面导航超时（秒）
    pub navigation_timeout_secs: u64,
    /// 单张图片下载超时（秒）
    pub fetch_timeout_secs: u64,
    /// 浏览器可执行文件路径（不设置则由 chromiumoxide 自动探测）
    pub chrome_executable: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: "output".to_string(),
            question_marker: "savol".to_string(),
            min_image_width: 200,
            min_image_height: 200,
            settle_delay_ms: 1200,
            navigation_timeout_secs: 60,
            fetch_timeout_secs: 30,
            chrome_executable: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(default.output_dir),
            question_marker: std::env::var("QUESTION_MARKER").unwrap_or(default.question_marker),
            min_image_width: std::env::var("MIN_IMAGE_WIDTH").ok().and_then(|v| v.parse().ok()).unwrap_or(default.min_image_width),
            min_image_height: std::env::var("MIN_IMAGE_HEIGHT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.min_image_height),
            settle_delay_ms: std::env::var("SETTLE_DELAY_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.settle_delay_ms),
            navigation_timeout_secs: std::env::var("NAVIGATION_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.navigation_timeout_secs),
            fetch_timeout_secs: std::env::var("FETCH_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.fetch_timeout_secs),
            chrome_executable: std::env::var("CHROME_EXECUTABLE").ok(),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
