// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json};
use std::sync::Arc;
use validator::Validate;

use crate::application::dto::analyze_request::AnalyzeRequestDto;
use crate::application::dto::analyze_response::AnalyzeResponseDto;
use crate::application::use_cases::analyze_text::AnalyzeTextUseCase;
use crate::presentation::errors::AppError;

/// 独立分析处理器
pub async fn analyze(
    Extension(use_case): Extension<Arc<AnalyzeTextUseCase>>,
    Json(request): Json<AnalyzeRequestDto>,
) -> Result<Json<AnalyzeResponseDto>, AppError> {
    request.validate()?;

    let fact_check = use_case.execute(request).await?;
    Ok(Json(AnalyzeResponseDto { fact_check }))
}
