// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json};
use std::sync::Arc;
use validator::Validate;

use crate::application::dto::assist_request::{AssistResponseDto, TranslateRequestDto};
use crate::application::use_cases::assist::AssistUseCase;
use crate::infrastructure::session_store::SessionStore;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::session_id::SessionId;

pub async fn summarize(
    Extension(assist): Extension<Arc<AssistUseCase>>,
    Extension(sessions): Extension<Arc<SessionStore>>,
    SessionId(session_id): SessionId,
) -> Result<Json<AssistResponseDto>, AppError> {
    let session = sessions.load(&session_id);
    Ok(Json(assist.summarize(&session).await?))
}

pub async fn translate(
    Extension(assist): Extension<Arc<AssistUseCase>>,
    Extension(sessions): Extension<Arc<SessionStore>>,
    SessionId(session_id): SessionId,
    Json(request): Json<TranslateRequestDto>,
) -> Result<Json<AssistResponseDto>, AppError> {
    request.validate()?;

    let session = sessions.load(&session_id);
    Ok(Json(assist.translate(&session, &request.target_lang).await?))
}
