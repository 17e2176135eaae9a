// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json};
use std::sync::Arc;
use validator::Validate;

use crate::application::dto::check_request::CheckRequestDto;
use crate::application::use_cases::check_article::CheckArticleUseCase;
use crate::domain::models::analysis::AnalysisReport;
use crate::infrastructure::session_store::SessionStore;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::session_id::SessionId;

/// 文章检查处理器
///
/// 请求有效时总是返回 200，后端失败体现在报告的来源与提示中
pub async fn check(
    Extension(use_case): Extension<Arc<CheckArticleUseCase>>,
    Extension(sessions): Extension<Arc<SessionStore>>,
    SessionId(session_id): SessionId,
    Json(request): Json<CheckRequestDto>,
) -> Result<Json<AnalysisReport>, AppError> {
    request.validate()?;
    let article = use_case.article_from_request(request).await?;

    let mut session = sessions.load(&session_id);
    let report = use_case.execute(&mut session, article).await;
    sessions.save(&session_id, session);

    Ok(Json(report))
}
