// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::application::use_cases::analyze_text::AnalyzeError;
use crate::application::use_cases::assist::AssistError;
use crate::application::use_cases::check_article::CheckError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，统一转换为 `{"error": ...}` 响应
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        if let Some(err) = self.0.downcast_ref::<AnalyzeError>() {
            return match err {
                AnalyzeError::MissingInput => StatusCode::BAD_REQUEST,
                AnalyzeError::Extraction(_) | AnalyzeError::Llm(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
        }
        if let Some(err) = self.0.downcast_ref::<AssistError>() {
            return match err {
                AssistError::NothingToSummarize | AssistError::NothingToTranslate => {
                    StatusCode::CONFLICT
                }
                AssistError::Llm(_) => StatusCode::BAD_GATEWAY,
            };
        }
        if self.0.downcast_ref::<CheckError>().is_some()
            || self.0.downcast_ref::<validator::ValidationErrors>().is_some()
        {
            return StatusCode::BAD_REQUEST;
        }
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = self.0.to_string();
        if status.is_server_error() {
            error!("Request failed: {:#}", self.0);
        }

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
