// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::{Duration, Instant};
use tracing::{debug, info};
use url::Url;

use crate::engines::traits::ExtractionError;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; factlens/0.1)";

/// 页面抓取引擎
///
/// 基于reqwest获取页面 HTML，只接受 http/https 地址
#[derive(Debug, Clone)]
pub struct FetchEngine {
    client: reqwest::Client,
    timeout: Duration,
}

impl FetchEngine {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
        }
    }

    /// 抓取页面 HTML
    ///
    /// # 错误
    /// * URL 无效或协议不受支持时返回 [`ExtractionError::Fetch`]
    /// * 非 2xx 状态、超时或网络错误同样返回 [`ExtractionError::Fetch`]
    pub async fn fetch_html(&self, url: &str) -> Result<String, ExtractionError> {
        let parsed = Url::parse(url).map_err(|e| ExtractionError::Fetch(format!("invalid URL: {}", e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ExtractionError::Fetch(format!(
                "unsupported URL scheme: {}",
                parsed.scheme()
            )));
        }

        info!("Fetching page: {}", parsed);
        let start = Instant::now();
        let response = self
            .client
            .get(parsed)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ExtractionError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractionError::Fetch(format!("HTTP {}", status.as_u16())));
        }

        let html = response
            .text()
            .await
            .map_err(|e| ExtractionError::Fetch(e.to_string()))?;
        debug!("Fetched {} bytes in {:?}", html.len(), start.elapsed());
        Ok(html)
    }
}
