// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, error};

use crate::domain::models::analysis::{AnalysisData, FactCheck, RawPercentages};
use crate::domain::services::percentages::renormalize_raw;
use crate::utils::errors::ErrorKind;
use crate::utils::retry_policy::{RetryDecision, Retryable};

/// 后端调用错误类型
#[derive(Error, Debug)]
pub enum BackendError {
    /// 非 2xx 响应，保留状态码和响应体
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// 单次尝试超时
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    /// 无法建立连接
    #[error("Network unreachable: {0}")]
    Network(String),
    /// 响应无法解析
    #[error("Invalid backend response: {0}")]
    Decode(String),
    /// 其他错误
    #[error("Backend request failed: {0}")]
    Other(String),
}

impl BackendError {
    fn from_reqwest(error: reqwest::Error, timeout: Duration) -> Self {
        if error.is_timeout() {
            BackendError::Timeout(timeout)
        } else if error.is_connect() {
            BackendError::Network(error.to_string())
        } else if error.is_decode() {
            BackendError::Decode(error.to_string())
        } else {
            BackendError::Other(error.to_string())
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 面向用户的失败分类
    pub fn kind(&self) -> ErrorKind {
        match self {
            BackendError::Timeout(_) => ErrorKind::Timeout,
            BackendError::Network(_) => ErrorKind::Offline,
            BackendError::Status { status: 404, .. } => ErrorKind::NotFound,
            BackendError::Status { status: 503, .. } => ErrorKind::ServiceUnavailable,
            BackendError::Status { status, .. } if (500..600).contains(status) => {
                ErrorKind::ServerError
            }
            _ => ErrorKind::Unknown,
        }
    }
}

/// 重试分类器：403/404 为永久错误，其余一律可重试
pub fn classify(error: &BackendError) -> RetryDecision {
    match error {
        BackendError::Status {
            status: 403 | 404, ..
        } => RetryDecision::Stop,
        _ => RetryDecision::Retry,
    }
}

impl Retryable for BackendError {
    fn retry_decision(&self) -> RetryDecision {
        classify(self)
    }
}

/// 后端 `/analyze` 的响应体
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendPayload {
    pub results: Option<RawPercentages>,
    pub fact_check: Option<FactCheck>,
    pub comparisons: Option<Value>,
}

/// 后端返回的分析结果
#[derive(Debug, Clone, PartialEq)]
pub struct BackendAnalysis {
    pub data: AnalysisData,
    pub comparisons: Option<Value>,
}

impl TryFrom<BackendPayload> for BackendAnalysis {
    type Error = BackendError;

    fn try_from(payload: BackendPayload) -> Result<Self, Self::Error> {
        let data = match (payload.fact_check, payload.results) {
            (Some(fact_check), _) => AnalysisData::FactCheck(fact_check),
            (None, Some(raw)) => AnalysisData::Results(
                renormalize_raw(raw).map_err(|e| BackendError::Decode(e.to_string()))?,
            ),
            (None, None) => {
                return Err(BackendError::Decode(
                    "response has neither `results` nor `factCheck`".to_string(),
                ))
            }
        };

        Ok(BackendAnalysis {
            data,
            comparisons: payload.comparisons,
        })
    }
}

/// 分析后端
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// 单次提交文本，不做任何重试
    async fn analyze(&self, text: &str) -> Result<BackendAnalysis, BackendError>;
}

/// 基于 HTTP 的分析后端
///
/// 每次尝试都受 `attempt_timeout` 限制，超时只中止这一次请求
pub struct HttpAnalysisBackend {
    client: reqwest::Client,
    endpoint: String,
    attempt_timeout: Duration,
}

impl HttpAnalysisBackend {
    pub fn new(endpoint: impl Into<String>, attempt_timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            attempt_timeout,
        }
    }

    async fn send(&self, text: &str) -> Result<BackendAnalysis, BackendError> {
        let request_body = json!({ "text": text });
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| BackendError::from_reqwest(e, self.attempt_timeout))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("HTTP error response body: {}", body);
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| BackendError::from_reqwest(e, self.attempt_timeout))?;
        let payload: BackendPayload =
            serde_json::from_slice(&bytes).map_err(|e| BackendError::Decode(e.to_string()))?;

        BackendAnalysis::try_from(payload)
    }
}

#[async_trait]
impl AnalysisBackend for HttpAnalysisBackend {
    async fn analyze(&self, text: &str) -> Result<BackendAnalysis, BackendError> {
        debug!(
            "Backend call: url={}, text_length={}",
            self.endpoint,
            text.chars().count()
        );
        let start = Instant::now();

        let result = tokio::time::timeout(self.attempt_timeout, self.send(text))
            .await
            .unwrap_or(Err(BackendError::Timeout(self.attempt_timeout)));

        debug!("Backend response received in {:?}", start.elapsed());
        result
    }
}
