// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json};
use std::sync::Arc;

use crate::infrastructure::status_probe::{ServiceStatus, StatusProbe};

/// 后端状态探测处理器
pub async fn status(Extension(probe): Extension<Arc<StatusProbe>>) -> Json<ServiceStatus> {
    Json(probe.check().await)
}
