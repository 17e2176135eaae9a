// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{
    article_payload, mount_backend_status, mount_llm_reply, spawn_app, Backoff, LLM_PATH,
};

#[tokio::test]
async fn summarize_without_checked_article_conflicts() {
    let app = spawn_app(Backoff::Fast).await;

    let response = app.server.post("/v1/summarize").await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>()["error"],
        "No article content available to summarize."
    );
}

/// 检查过的文章按会话保存，摘要只对同一会话可见
#[tokio::test]
async fn summarize_uses_article_from_same_session() {
    let app = spawn_app(Backoff::Fast).await;
    mount_backend_status(&app.backend, 404).await;
    mount_llm_reply(&app.llm, "A short summary.").await;

    app.server
        .post("/v1/check")
        .add_header("x-session-id", "tab-1")
        .json(&article_payload())
        .await;

    let response = app
        .server
        .post("/v1/summarize")
        .add_header("x-session-id", "tab-1")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["output"], "A short summary.");
    assert_eq!(
        body["articleTitle"],
        "City council approves transit budget - Reuters"
    );

    let other = app
        .server
        .post("/v1/summarize")
        .add_header("x-session-id", "tab-2")
        .await;
    assert_eq!(other.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn translate_uses_default_session() {
    let app = spawn_app(Backoff::Fast).await;
    mount_backend_status(&app.backend, 404).await;
    mount_llm_reply(&app.llm, "Le conseil municipal a approuvé le budget.").await;

    app.server.post("/v1/check").json(&article_payload()).await;
    let response = app
        .server
        .post("/v1/translate")
        .json(&json!({"targetLang": "French"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>()["output"],
        "Le conseil municipal a approuvé le budget."
    );
}

#[tokio::test]
async fn translate_surfaces_llm_failure_as_bad_gateway() {
    let app = spawn_app(Backoff::Fast).await;
    mount_backend_status(&app.backend, 404).await;

    app.server.post("/v1/check").json(&article_payload()).await;

    // Only the translation call fails; the check above already fell back
    Mock::given(method("POST"))
        .and(path(LLM_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&app.llm)
        .await;

    let response = app
        .server
        .post("/v1/translate")
        .json(&json!({"targetLang": "German"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    assert!(response.json::<Value>()["error"]
        .as_str()
        .unwrap()
        .contains("429"));
}
