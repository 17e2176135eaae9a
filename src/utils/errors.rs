// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 后端调用失败的分类
///
/// 用于向用户展示可读的失败原因，同时保留诊断信息
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// 请求超时
    Timeout,
    /// 服务端点不存在
    NotFound,
    /// 服务器内部错误
    ServerError,
    /// 服务暂不可用
    ServiceUnavailable,
    /// 网络不可达
    Offline,
    /// 未知错误
    Unknown,
}

impl ErrorKind {
    /// 面向用户的简短提示
    pub fn user_message(&self) -> &'static str {
        match self {
            ErrorKind::Timeout => "Request timed out - service may be slow",
            ErrorKind::NotFound => "Service endpoint not found",
            ErrorKind::ServerError => "Server error occurred",
            ErrorKind::ServiceUnavailable => "Service is temporarily down",
            ErrorKind::Offline => "No internet connection",
            ErrorKind::Unknown => "Service temporarily unavailable",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Timeout => "timeout",
            ErrorKind::NotFound => "not_found",
            ErrorKind::ServerError => "server_error",
            ErrorKind::ServiceUnavailable => "service_unavailable",
            ErrorKind::Offline => "offline",
            ErrorKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
