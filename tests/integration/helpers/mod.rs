// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use factlens::config::settings::Settings;
use factlens::presentation::routes::{self, AppServices};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-key";
pub const LLM_PATH: &str = "/models/gemini-1.5-pro:generateContent";

/// 测试应用
///
/// 分析后端和生成式接口都由 wiremock 模拟
pub struct TestApp {
    pub server: TestServer,
    pub backend: MockServer,
    pub llm: MockServer,
}

/// 退避间隔，`Fast` 用于不关心时间的用例
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    Default,
    Fast,
}

pub async fn spawn_app(backoff: Backoff) -> TestApp {
    spawn_app_with(backoff, Some(TEST_API_KEY)).await
}

pub async fn spawn_app_with(backoff: Backoff, api_key: Option<&str>) -> TestApp {
    let backend = MockServer::start().await;
    let llm = MockServer::start().await;

    let mut settings = test_settings(&format!("{}/analyze", backend.uri()), &llm, backoff);
    settings.llm.api_key = api_key.map(str::to_string);
    let server = TestServer::new(routes::app(AppServices::from_settings(&settings))).unwrap();

    TestApp {
        server,
        backend,
        llm,
    }
}

/// 单次尝试超时为 1 秒的应用
pub async fn spawn_app_with_short_attempts() -> TestApp {
    let backend = MockServer::start().await;
    let llm = MockServer::start().await;

    let mut settings = test_settings(&format!("{}/analyze", backend.uri()), &llm, Backoff::Fast);
    settings.backend.attempt_timeout_secs = 1;
    let server = TestServer::new(routes::app(AppServices::from_settings(&settings))).unwrap();

    TestApp {
        server,
        backend,
        llm,
    }
}

/// 后端地址指向已关闭端口的应用，每次尝试都会连接失败
pub async fn spawn_offline_app() -> (TestServer, MockServer) {
    let llm = MockServer::start().await;
    let closed_addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let settings = test_settings(&format!("http://{}/analyze", closed_addr), &llm, Backoff::Fast);
    let server = TestServer::new(routes::app(AppServices::from_settings(&settings))).unwrap();
    (server, llm)
}

/// 生成式接口地址指向已关闭端口的应用
pub async fn spawn_app_with_unreachable_llm() -> TestServer {
    let backend = MockServer::start().await;
    let closed_addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let mut settings = test_settings(&format!("{}/analyze", backend.uri()), &backend, Backoff::Fast);
    settings.llm.api_base_url = format!("http://{}", closed_addr);
    TestServer::new(routes::app(AppServices::from_settings(&settings))).unwrap()
}

fn test_settings(analyze_url: &str, llm: &MockServer, backoff: Backoff) -> Settings {
    let mut settings = Settings::from_defaults().expect("default settings");
    settings.backend.analyze_url = analyze_url.to_string();
    settings.backend.attempt_timeout_secs = 5;
    if backoff == Backoff::Fast {
        settings.backend.initial_backoff_ms = 10;
        settings.backend.max_backoff_ms = 20;
    }
    settings.llm.api_key = Some(TEST_API_KEY.to_string());
    settings.llm.api_base_url = llm.uri();
    settings.llm.timeout_secs = 5;
    settings
}

/// 生成式接口的成功回复
pub fn llm_reply(text: &str) -> Value {
    json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
    })
}

pub async fn mount_llm_reply(llm: &MockServer, text: &str) {
    Mock::given(method("POST"))
        .and(path(LLM_PATH))
        .and(header("x-goog-api-key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(llm_reply(text)))
        .mount(llm)
        .await;
}

pub async fn mount_backend_status(backend: &MockServer, status: u16) {
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(status).set_body_string("backend failure"))
        .mount(backend)
        .await;
}

pub fn article_payload() -> Value {
    json!({
        "title": "City council approves transit budget - Reuters",
        "textContent": "The city council approved a budget that raises transit spending by twelve percent.",
        "content": "<p>The city council approved a budget.</p>",
        "url": "https://www.reuters.com/world/transit-budget"
    })
}

pub async fn backend_request_count(backend: &MockServer) -> usize {
    backend
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or(0)
}
