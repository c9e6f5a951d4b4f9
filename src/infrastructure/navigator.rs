//! 页面导航器 - 基础设施层
//!
//! 持有唯一的 page 资源，只暴露"导航"和"执行 JS"两种能力

use std::time::Duration;

use chromiumoxide::Page;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::{HarvestError, Result};

/// 页面导航器
///
/// 职责：
/// - 持有唯一的 Page 资源
/// - 暴露 open() / eval() 能力
/// - 不认识 CandidateLink / Subject
/// - 不处理业务流程
pub struct Navigator {
    page: Page,
    timeout: Duration,
}

impl Navigator {
    /// 创建新的导航器
    ///
    /// # 参数
    /// - `page`: 浏览器页面
    /// - `timeout`: 单次导航的超时上限
    pub fn new(page: Page, timeout: Duration) -> Self {
        Self { page, timeout }
    }

    /// 导航到指定 URL，等待页面加载完成
    ///
    /// # 返回
    /// 返回跳转后的实际地址（重定向之后），供相对链接解析使用
    pub async fn open(&self, url: &str) -> Result<String> {
        debug!("导航到: {}", url);

        let navigation = async {
            self.page.goto(url).await?;
            self.page.wait_for_navigation().await?;
            self.page.url().await
        };

        match tokio::time::timeout(self.timeout, navigation).await {
            Err(_) => Err(HarvestError::NavigationTimeout {
                url: url.to_string(),
                timeout_secs: self.timeout.as_secs(),
            }),
            Ok(Err(e)) => Err(HarvestError::navigation(url, e)),
            // 浏览器未报告地址时退回请求地址
            Ok(Ok(current)) => Ok(current.unwrap_or_else(|| url.to_string())),
        }
    }

    /// 执行 JS 代码并返回 JSON 结果
    pub async fn eval(&self, js_code: impl Into<String>) -> Result<JsonValue> {
        let result = self.page.evaluate(js_code.into()).await?;
        let json_value = result.into_value()?;
        Ok(json_value)
    }

    /// 执行 JS 代码并反序列化为指定类型
    pub async fn eval_as<T: DeserializeOwned>(&self, js_code: impl Into<String>) -> Result<T> {
        let json_value = self.eval(js_code).await?;
        let typed_value = serde_json::from_value(json_value)?;
        Ok(typed_value)
    }
}
