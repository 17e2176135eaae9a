// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::application::use_cases::analyze_text::AnalyzeTextUseCase;
use crate::application::use_cases::assist::AssistUseCase;
use crate::application::use_cases::check_article::CheckArticleUseCase;
use crate::config::settings::Settings;
use crate::domain::services::llm_service::{LLMService, LLMServiceTrait};
use crate::domain::services::source_rating::NewsSiteDetector;
use crate::engines::fetch_engine::FetchEngine;
use crate::engines::readability::ReadabilityExtractor;
use crate::engines::traits::ArticleExtractor;
use crate::infrastructure::backend_client::{AnalysisBackend, HttpAnalysisBackend};
use crate::infrastructure::resilient_backend::ResilientBackend;
use crate::infrastructure::session_store::SessionStore;
use crate::infrastructure::status_probe::StatusProbe;
use crate::presentation::handlers::{
    analyze_handler, assist_handler, check_handler, status_handler,
};

/// 处理器共享的服务集合
#[derive(Clone)]
pub struct AppServices {
    pub check: Arc<CheckArticleUseCase>,
    pub analyze: Arc<AnalyzeTextUseCase>,
    pub assist: Arc<AssistUseCase>,
    pub status: Arc<StatusProbe>,
    pub sessions: Arc<SessionStore>,
}

impl AppServices {
    /// 按配置组装全部服务
    pub fn from_settings(settings: &Settings) -> Self {
        let llm: Arc<dyn LLMServiceTrait> = Arc::new(LLMService::new(&settings.llm));
        Self::with_llm(settings, llm)
    }

    /// 使用指定的模型服务组装，其余依赖按配置创建
    pub fn with_llm(settings: &Settings, llm: Arc<dyn LLMServiceTrait>) -> Self {
        let backend_settings = &settings.backend;
        let analysis = &settings.analysis;

        let backend: Arc<dyn AnalysisBackend> = Arc::new(HttpAnalysisBackend::new(
            backend_settings.analyze_url.clone(),
            backend_settings.attempt_timeout(),
        ));
        let extractor: Arc<dyn ArticleExtractor> =
            Arc::new(ReadabilityExtractor::new(analysis.min_article_chars));
        let news_sites = analysis
            .news_domains
            .clone()
            .map(NewsSiteDetector::new)
            .unwrap_or_default();

        let check = CheckArticleUseCase::new(
            ResilientBackend::new(backend, backend_settings.retry_policy()),
            llm.clone(),
            extractor.clone(),
            news_sites,
            backend_settings.max_text_chars,
        );
        let analyze = AnalyzeTextUseCase::new(
            llm.clone(),
            FetchEngine::new(std::time::Duration::from_secs(analysis.fetch_timeout_secs)),
            extractor,
            analysis.max_content_chars,
        );

        Self {
            check: Arc::new(check),
            analyze: Arc::new(analyze),
            assist: Arc::new(AssistUseCase::new(llm, analysis.assist_max_chars)),
            status: Arc::new(StatusProbe::new(
                backend_settings.analyze_url.clone(),
                backend_settings.status_timeout(),
            )),
            sessions: Arc::new(SessionStore::new(analysis.session_capacity)),
        }
    }
}

/// 创建应用路由
pub fn routes() -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/analyze", post(analyze_handler::analyze))
        .route("/v1/check", post(check_handler::check))
        .route("/v1/summarize", post(assist_handler::summarize))
        .route("/v1/translate", post(assist_handler::translate))
        .route("/v1/status", get(status_handler::status))
        .route("/v1/version", get(version))
}

/// 挂载服务和请求追踪后的完整应用
pub fn app(services: AppServices) -> Router {
    routes()
        .layer(Extension(services.check))
        .layer(Extension(services.analyze))
        .layer(Extension(services.assist))
        .layer(Extension(services.status))
        .layer(Extension(services.sessions))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
pub async fn health_check() -> &'static str {
    "News Fact-Checker API is running"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
