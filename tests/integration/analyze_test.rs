// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{
    mount_llm_reply, spawn_app, spawn_app_with, spawn_app_with_unreachable_llm, Backoff, LLM_PATH,
    TEST_API_KEY,
};

/// 空文本返回 400 并带 error 字段
#[tokio::test]
async fn analyze_rejects_empty_text() {
    let app = spawn_app(Backoff::Fast).await;

    for payload in [json!({}), json!({"text": ""}), json!({"text": "   "})] {
        let response = app.server.post("/analyze").json(&payload).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>()["error"],
            "Missing required parameter: text"
        );
    }
    assert!(app.llm.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn analyze_parses_fenced_reply() {
    let app = spawn_app(Backoff::Fast).await;
    mount_llm_reply(
        &app.llm,
        "```json\n{\"summary\": \"Budget approved.\", \"claims\": [\"12% increase\"], \
\"tone\": \"neutral\", \"bias\": \"Center\", \"credibility\": \"High\", \
\"reliabilityScore\": 8, \"verificationSources\": [\"council minutes\"]}\n```",
    )
    .await;

    let response = app
        .server
        .post("/analyze")
        .json(&json!({"text": "The council approved the budget."}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let fact_check = &response.json::<Value>()["factCheck"];
    assert_eq!(fact_check["summary"], "Budget approved.");
    assert_eq!(fact_check["claims"][0], "12% increase");
    assert_eq!(fact_check["reliabilityScore"], 8.0);
    assert!(fact_check.get("rawAnalysis").is_none());
}

#[tokio::test]
async fn analyze_returns_raw_text_when_reply_is_not_json() {
    let app = spawn_app(Backoff::Fast).await;
    mount_llm_reply(&app.llm, "The article appears balanced.").await;

    let response = app
        .server
        .post("/analyze")
        .json(&json!({"text": "Some article text."}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>()["factCheck"]["rawAnalysis"],
        "The article appears balanced."
    );
}

#[tokio::test]
async fn analyze_extracts_text_from_html() {
    let app = spawn_app(Backoff::Fast).await;
    mount_llm_reply(&app.llm, "{\"summary\": \"ok\"}").await;
    let html = format!(
        "<html><head><title>Story</title></head><body><article><p>{}</p></article></body></html>",
        "Officials confirmed the bridge reopening. ".repeat(5)
    );

    let response = app.server.post("/analyze").json(&json!({"html": html})).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let requests = app.llm.received_requests().await.unwrap();
    let prompt_body = String::from_utf8_lossy(&requests[0].body).to_string();
    assert!(prompt_body.contains("Officials confirmed the bridge reopening."));
}

#[tokio::test]
async fn analyze_surfaces_llm_failure_as_500() {
    let app = spawn_app(Backoff::Fast).await;
    Mock::given(method("POST"))
        .and(path(LLM_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("model overloaded"))
        .expect(1)
        .mount(&app.llm)
        .await;

    let response = app
        .server
        .post("/analyze")
        .json(&json!({"text": "Some article text."}))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let error = response.json::<Value>()["error"].as_str().unwrap().to_string();
    assert!(error.starts_with("Failed to analyze article"), "{error}");
}

#[tokio::test]
async fn analyze_without_api_key_is_a_configuration_error() {
    let app = spawn_app_with(Backoff::Fast, None).await;

    let response = app
        .server
        .post("/analyze")
        .json(&json!({"text": "Some article text."}))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.json::<Value>()["error"]
        .as_str()
        .unwrap()
        .contains("API key not configured"));
    assert!(app.llm.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn analyze_rejects_invalid_url() {
    let app = spawn_app(Backoff::Fast).await;

    let response = app
        .server
        .post("/analyze")
        .json(&json!({"url": "not a url"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>().get("error").is_some());
}

/// 模型不可达时返回 500，响应体中不带密钥和请求地址
#[tokio::test]
async fn analyze_transport_failure_hides_api_key() {
    let server = spawn_app_with_unreachable_llm().await;

    let response = server
        .post("/analyze")
        .json(&json!({"text": "The council approved the budget."}))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.text();
    assert!(body.contains("Failed to analyze article"), "{body}");
    assert!(!body.contains(TEST_API_KEY), "{body}");
    assert!(!body.contains("generateContent"), "{body}");
}
