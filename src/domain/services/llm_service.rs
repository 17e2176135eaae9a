// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use metrics::counter;
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::config::settings::LlmSettings;
use crate::infrastructure::metrics::LLM_REQUESTS_TOTAL;
use crate::utils::text::truncate_chars;

/// 密钥通过请求头传递，不出现在 URL 中
const API_KEY_HEADER: &str = "x-goog-api-key";

/// LLM 调用错误
#[derive(Error, Debug)]
pub enum LlmError {
    /// 未配置 API 密钥，属于配置错误，不应重试
    #[error("LLM API key not configured")]
    MissingApiKey,
    #[error("LLM request timed out after {0:?}")]
    Timeout(Duration),
    #[error("LLM API returned error: {status} - {body}")]
    Status { status: u16, body: String },
    #[error("Failed to send request to LLM API: {0}")]
    Transport(String),
    #[error("Invalid response format from LLM API")]
    InvalidResponse,
}

#[async_trait]
pub trait LLMServiceTrait: Send + Sync {
    /// 发送提示词并返回模型的文本回复
    async fn generate_text(&self, prompt: &str) -> Result<String, LlmError>;
}

/// LLM服务 - 处理与生成式文本接口的交互
///
/// 请求体为 `{contents:[{parts:[{text}]}]}`，
/// 回复取 `candidates[0].content.parts[0].text`。
/// 每次调用都有独立的超时，超时只取消当前这一次请求。
pub struct LLMService {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    api_base_url: String,
    timeout: Duration,
}

#[async_trait]
impl LLMServiceTrait for LLMService {
    async fn generate_text(&self, prompt: &str) -> Result<String, LlmError> {
        LLMService::generate_text(self, prompt).await
    }
}

impl LLMService {
    pub fn new(settings: &LlmSettings) -> Self {
        Self::new_with_config(
            settings.api_key.clone(),
            settings.model.clone(),
            settings.api_base_url.clone(),
            settings.timeout(),
        )
    }

    pub fn new_with_config(
        api_key: Option<String>,
        model: String,
        api_base_url: String,
        timeout: Duration,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.filter(|k| !k.is_empty()),
            model,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base_url, self.model)
    }

    /// 调用生成式接口
    ///
    /// # 错误
    /// * 未配置 API 密钥时返回 [`LlmError::MissingApiKey`]
    /// * 超时、非 2xx 状态或回复结构不符时返回对应错误
    pub async fn generate_text(&self, prompt: &str) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let url = self.endpoint();
        info!("LLM call started: {}", url);
        counter!(LLM_REQUESTS_TOTAL).increment(1);
        debug!("Prompt preview: {}...", truncate_chars(prompt, 100));

        let request_body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let started = Instant::now();
        let call = async {
            let response = self
                .client
                .post(&url)
                .header(API_KEY_HEADER, api_key)
                .json(&request_body)
                .send()
                .await
                .map_err(transport_error)?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                error!("LLM API error response: {} - {}", status, body);
                return Err(LlmError::Status {
                    status: status.as_u16(),
                    body,
                });
            }

            response.json::<Value>().await.map_err(transport_error)
        };

        let body = tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| {
                error!("LLM request timed out after {:?}", self.timeout);
                LlmError::Timeout(self.timeout)
            })??;

        debug!("LLM call finished in {:?}", started.elapsed());

        match body["candidates"][0]["content"]["parts"][0]["text"].as_str() {
            Some(text) => Ok(text.to_string()),
            None => {
                error!("Invalid LLM response structure: {}", body);
                Err(LlmError::InvalidResponse)
            }
        }
    }
}

/// 传输错误只保留原因，去掉请求 URL
fn transport_error(error: reqwest::Error) -> LlmError {
    LlmError::Transport(error.without_url().to_string())
}
