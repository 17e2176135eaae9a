// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{
    article_payload, backend_request_count, mount_backend_status, mount_llm_reply, spawn_app,
    spawn_app_with, spawn_app_with_short_attempts, spawn_offline_app, Backoff,
};

fn triple(report: &Value) -> (u64, u64, u64) {
    let results = &report["data"]["results"];
    (
        results["true"].as_u64().unwrap(),
        results["false"].as_u64().unwrap(),
        results["unknown"].as_u64().unwrap(),
    )
}

/// 后端前两次失败、第三次成功：共三次尝试，退避约 1s + 2s
#[tokio::test]
async fn check_retries_backend_until_success() {
    let app = spawn_app(Backoff::Default).await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(500).set_body_string("temporary"))
        .up_to_n_times(2)
        .with_priority(1)
        .mount(&app.backend)
        .await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": {"true": 60, "false": 25, "unknown": 15},
            "comparisons": {"matched": 3}
        })))
        .with_priority(2)
        .mount(&app.backend)
        .await;

    let started = Instant::now();
    let response = app.server.post("/v1/check").json(&article_payload()).await;
    let elapsed = started.elapsed();

    assert_eq!(response.status_code(), StatusCode::OK);
    let report = response.json::<Value>();
    assert_eq!(report["provenance"], "live");
    assert!(report["id"].is_string());
    assert_eq!(report["backendAttempts"], 3);
    assert_eq!(triple(&report), (60, 25, 15));
    assert_eq!(report["comparisons"]["matched"], 3);
    assert!(report.get("note").is_none());
    assert_eq!(backend_request_count(&app.backend).await, 3);
    assert!(elapsed >= Duration::from_secs(3), "elapsed {:?}", elapsed);
}

#[tokio::test]
async fn check_sends_legacy_text_body() {
    let app = spawn_app(Backoff::Fast).await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .and(body_json(json!({"text": article_payload()["textContent"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "factCheck": {"summary": "Accurate.", "reliabilityScore": 9}
        })))
        .expect(1)
        .mount(&app.backend)
        .await;

    let response = app.server.post("/v1/check").json(&article_payload()).await;

    let report = response.json::<Value>();
    assert_eq!(report["provenance"], "live");
    assert_eq!(report["data"]["factCheck"]["summary"], "Accurate.");
    assert_eq!(report["credibility"], "High");
    assert_eq!(report["isNewsSite"], true);
    assert_eq!(report["bias"], "Unknown");
}

/// 404 属于永久错误，只尝试一次
#[tokio::test]
async fn check_does_not_retry_not_found() {
    let app = spawn_app(Backoff::Default).await;
    mount_backend_status(&app.backend, 404).await;
    mount_llm_reply(&app.llm, "{\"true\": 50, \"false\": 30, \"unknown\": 20}").await;

    let started = Instant::now();
    let response = app.server.post("/v1/check").json(&article_payload()).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let report = response.json::<Value>();
    assert_eq!(report["backendAttempts"], 1);
    assert_eq!(report["errorKind"], "not_found");
    assert_eq!(report["provenance"], "ai_fallback");
    assert_eq!(backend_request_count(&app.backend).await, 1);
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn check_uses_ai_fallback_with_prose_json() {
    let app = spawn_app(Backoff::Fast).await;
    mount_backend_status(&app.backend, 503).await;
    mount_llm_reply(
        &app.llm,
        "Sure, here is my assessment: {\"true\":70,\"false\":10,\"unknown\":20} Thanks!",
    )
    .await;

    let response = app.server.post("/v1/check").json(&article_payload()).await;

    let report = response.json::<Value>();
    assert_eq!(report["provenance"], "ai_fallback");
    assert_eq!(triple(&report), (70, 10, 20));
    assert_eq!(report["errorKind"], "service_unavailable");
    assert_eq!(
        report["note"],
        "⚠️ Service is temporarily down, analysis provided by AI fallback"
    );
    assert_eq!(report["backendAttempts"], 3);
}

/// 后端和模型都失败时给出估算结果
#[tokio::test]
async fn check_estimates_when_everything_fails() {
    let app = spawn_app(Backoff::Fast).await;
    mount_backend_status(&app.backend, 500).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.llm)
        .await;

    let response = app.server.post("/v1/check").json(&article_payload()).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let report = response.json::<Value>();
    assert_eq!(report["provenance"], "estimated");
    assert_eq!(report["errorKind"], "server_error");
    assert_eq!(
        report["note"],
        "⚠️ Server error occurred, showing estimated analysis"
    );
    let (t, f, u) = triple(&report);
    assert_eq!(t + f + u, 100);
    assert!(t >= 30 && f <= 30, "unexpected estimate ({t}, {f}, {u})");
}

#[tokio::test]
async fn check_estimates_without_api_key() {
    let app = spawn_app_with(Backoff::Fast, None).await;
    mount_backend_status(&app.backend, 502).await;

    let response = app.server.post("/v1/check").json(&article_payload()).await;

    let report = response.json::<Value>();
    assert_eq!(report["provenance"], "estimated");
    assert!(app.llm.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn check_reports_offline_backend() {
    let (server, llm) = spawn_offline_app().await;
    mount_llm_reply(&llm, "no json here").await;

    let response = server.post("/v1/check").json(&article_payload()).await;

    let report = response.json::<Value>();
    assert_eq!(report["errorKind"], "offline");
    assert_eq!(report["provenance"], "estimated");
    assert_eq!(report["backendAttempts"], 3);
    assert_eq!(llm.received_requests().await.unwrap().len(), 1);
}

/// 每次尝试都超时：共 3 次尝试，报告超时分类
#[tokio::test]
async fn check_times_out_each_slow_attempt() {
    let app = spawn_app_with_short_attempts().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"results": {"true": 80, "false": 10, "unknown": 10}}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&app.backend)
        .await;
    mount_llm_reply(&app.llm, "{\"true\": 60, \"false\": 20, \"unknown\": 20}").await;

    let started = Instant::now();
    let response = app.server.post("/v1/check").json(&article_payload()).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let report = response.json::<Value>();
    assert_eq!(report["errorKind"], "timeout");
    assert_eq!(report["backendAttempts"], 3);
    assert_eq!(report["provenance"], "ai_fallback");
    assert_eq!(
        report["note"],
        "⚠️ Request timed out - service may be slow, analysis provided by AI fallback"
    );
    assert_eq!(backend_request_count(&app.backend).await, 3);
    // three 1s attempts, never the 3s the backend would take
    assert!(started.elapsed() < Duration::from_secs(6));
}

#[tokio::test]
async fn check_without_text_is_bad_request() {
    let app = spawn_app(Backoff::Fast).await;

    let response = app
        .server
        .post("/v1/check")
        .json(&json!({"title": "Empty"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "Missing required parameter: text"
    );
    assert_eq!(backend_request_count(&app.backend).await, 0);
}
