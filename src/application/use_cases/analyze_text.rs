// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::application::dto::analyze_request::AnalyzeRequestDto;
use crate::domain::models::analysis::FactCheck;
use crate::domain::services::llm_service::{LLMServiceTrait, LlmError};
use crate::domain::services::prompts::fact_check_prompt;
use crate::engines::fetch_engine::FetchEngine;
use crate::engines::traits::{extract_blocking, ArticleExtractor, ExtractionError};
use crate::utils::json_extract::parse_lenient;
use crate::utils::text::truncate_chars;

#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("Missing required parameter: text")]
    MissingInput,
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error("Failed to analyze article: {0}")]
    Llm(#[from] LlmError),
}

/// 独立分析用例
///
/// 单次模型调用，不重试。回复无法解析为 JSON 时以原始文本返回。
pub struct AnalyzeTextUseCase {
    llm: Arc<dyn LLMServiceTrait>,
    fetcher: FetchEngine,
    extractor: Arc<dyn ArticleExtractor>,
    max_content_chars: usize,
}

impl AnalyzeTextUseCase {
    pub fn new(
        llm: Arc<dyn LLMServiceTrait>,
        fetcher: FetchEngine,
        extractor: Arc<dyn ArticleExtractor>,
        max_content_chars: usize,
    ) -> Self {
        Self {
            llm,
            fetcher,
            extractor,
            max_content_chars,
        }
    }

    pub async fn execute(&self, request: AnalyzeRequestDto) -> Result<FactCheck, AnalyzeError> {
        let content = self.resolve_content(request).await?;
        let content = truncate_chars(&content, self.max_content_chars);
        info!("Analyzing content: length={}", content.chars().count());

        let reply = self.llm.generate_text(&fact_check_prompt(content)).await?;
        Ok(parse_fact_check(&reply))
    }

    /// 按 text、html、url 的顺序确定待分析正文
    async fn resolve_content(&self, request: AnalyzeRequestDto) -> Result<String, AnalyzeError> {
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        if let Some(text) = non_blank(request.text) {
            return Ok(text);
        }
        let url = non_blank(request.url);
        if let Some(html) = non_blank(request.html) {
            let article = extract_blocking(Arc::clone(&self.extractor), html, url).await?;
            return Ok(article.text_content);
        }
        if let Some(url) = url {
            let html = self.fetcher.fetch_html(&url).await?;
            let article = extract_blocking(Arc::clone(&self.extractor), html, Some(url)).await?;
            return Ok(article.text_content);
        }

        Err(AnalyzeError::MissingInput)
    }
}

/// 解析模型的核查回复，无法识别时保留原文
pub fn parse_fact_check(reply: &str) -> FactCheck {
    match parse_lenient(reply).map(serde_json::from_value::<FactCheck>) {
        Some(Ok(fact_check)) => fact_check,
        Some(Err(e)) => {
            warn!("Model reply is JSON but not a fact check: {}", e);
            FactCheck::raw(reply)
        }
        None => {
            debug!("Model reply is not JSON, returning raw analysis");
            FactCheck::raw(reply)
        }
    }
}
