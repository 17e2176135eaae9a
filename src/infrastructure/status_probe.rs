// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// 后端可用性
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatus {
    pub is_up: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 后端状态探测
///
/// 对后端地址发送 HEAD 请求，状态码小于 500 即认为服务在线
#[derive(Debug, Clone)]
pub struct StatusProbe {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl StatusProbe {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            timeout,
        }
    }

    pub async fn check(&self) -> ServiceStatus {
        let result = self
            .client
            .head(&self.endpoint)
            .timeout(self.timeout)
            .send()
            .await;

        match result {
            Ok(response) => {
                let code = response.status().as_u16();
                debug!("Status probe {} returned {}", self.endpoint, code);
                ServiceStatus {
                    is_up: code < 500,
                    status_code: Some(code),
                    error: None,
                }
            }
            Err(e) => {
                warn!("Status probe {} failed: {}", self.endpoint, e);
                ServiceStatus {
                    is_up: false,
                    status_code: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}
