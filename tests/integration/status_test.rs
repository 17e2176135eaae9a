// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{spawn_app, spawn_offline_app, Backoff};

#[tokio::test]
async fn status_reports_backend_up() {
    let app = spawn_app(Backoff::Fast).await;
    Mock::given(method("HEAD"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.backend)
        .await;

    let response = app.server.get("/v1/status").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let status = response.json::<Value>();
    assert_eq!(status["isUp"], true);
    assert_eq!(status["statusCode"], 200);
}

#[tokio::test]
async fn status_reports_backend_down() {
    let (server, _llm) = spawn_offline_app().await;

    let response = server.get("/v1/status").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let status = response.json::<Value>();
    assert_eq!(status["isUp"], false);
    assert!(status["error"].is_string());
    assert!(status.get("statusCode").is_none());
}
