// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub const SESSION_HEADER: &str = "x-session-id";
pub const DEFAULT_SESSION: &str = "default";
const MAX_SESSION_ID_LEN: usize = 128;

/// 会话标识
///
/// 取自 `x-session-id` 请求头，缺失或为空时使用默认会话
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(pub String);

impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(SESSION_HEADER) else {
            return Ok(SessionId(DEFAULT_SESSION.to_string()));
        };

        match value.to_str().map(str::trim) {
            Ok("") => Ok(SessionId(DEFAULT_SESSION.to_string())),
            Ok(id) if id.len() <= MAX_SESSION_ID_LEN => Ok(SessionId(id.to_string())),
            _ => {
                let body = Json(json!({ "error": "Invalid x-session-id header" }));
                Err((StatusCode::BAD_REQUEST, body).into_response())
            }
        }
    }
}
