// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::application::dto::check_request::CheckRequestDto;
use crate::domain::models::analysis::{AnalysisData, AnalysisReport, Provenance};
use crate::domain::models::article::Article;
use crate::domain::models::session::AnalysisSession;
use crate::domain::services::fallback::{parse_percentage_reply, synthetic_estimate};
use crate::domain::services::llm_service::LLMServiceTrait;
use crate::domain::services::prompts::percentage_fallback_prompt;
use crate::domain::services::source_rating::{source_credibility, NewsSiteDetector};
use crate::engines::traits::{extract_blocking, ArticleExtractor, ExtractionError};
use crate::infrastructure::backend_client::BackendError;
use crate::infrastructure::metrics::record_tier;
use crate::infrastructure::resilient_backend::ResilientBackend;
use crate::utils::errors::ErrorKind;
use crate::utils::text::truncate_chars;

/// 文章检查错误
///
/// 只在请求本身无效时出现；后端与兜底的失败都会被吸收进报告
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Missing required parameter: text")]
    MissingText,
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// 文章检查用例
///
/// 依次尝试：带重试的后端分析、模型兜底、随机估算。无论哪一层给出结果，
/// 都会生成完整报告，调用方总能拿到一个百分比之和为 100 的结论。
pub struct CheckArticleUseCase {
    backend: ResilientBackend,
    llm: Arc<dyn LLMServiceTrait>,
    extractor: Arc<dyn ArticleExtractor>,
    news_sites: NewsSiteDetector,
    max_text_chars: usize,
}

/// 一次降级链路的产出
struct TierResult {
    data: AnalysisData,
    comparisons: Option<Value>,
    provenance: Provenance,
    note: Option<String>,
}

impl CheckArticleUseCase {
    pub fn new(
        backend: ResilientBackend,
        llm: Arc<dyn LLMServiceTrait>,
        extractor: Arc<dyn ArticleExtractor>,
        news_sites: NewsSiteDetector,
        max_text_chars: usize,
    ) -> Self {
        Self {
            backend,
            llm,
            extractor,
            news_sites,
            max_text_chars,
        }
    }

    /// 将请求映射为文章
    ///
    /// 请求中没有正文但带有 HTML 时，先用提取器取出正文
    pub async fn article_from_request(&self, dto: CheckRequestDto) -> Result<Article, CheckError> {
        if !dto.text_content.trim().is_empty() {
            return Ok(Article::new(dto.title, dto.text_content, dto.content, dto.url));
        }

        let Some(html) = dto.html.filter(|h| !h.trim().is_empty()) else {
            return Err(CheckError::MissingText);
        };
        let mut article = extract_blocking(Arc::clone(&self.extractor), html, dto.url).await?;
        if !dto.title.trim().is_empty() {
            article.title = dto.title;
        }
        Ok(article)
    }

    /// 检查文章并更新会话中的最近文章
    pub async fn execute(&self, session: &mut AnalysisSession, article: Article) -> AnalysisReport {
        let id = Uuid::new_v4();
        let article = Arc::new(article);
        session.remember(Arc::clone(&article));

        let text = truncate_chars(&article.text_content, self.max_text_chars);
        info!(
            "Checking article {}: title={:?}, text_length={}",
            id,
            article.title,
            text.chars().count()
        );

        let outcome = self.backend.call(text).await;
        let attempts = outcome.trace.attempts;

        let (tier, error_kind, error_detail) = match outcome.result {
            Ok(analysis) => (
                TierResult {
                    data: analysis.data,
                    comparisons: analysis.comparisons,
                    provenance: Provenance::Live,
                    note: None,
                },
                None,
                None,
            ),
            Err(error) => {
                let kind = error.kind();
                let tier = self.fall_back(&article, text, &error, kind).await;
                (tier, Some(kind), Some(error.to_string()))
            }
        };

        record_tier(tier.provenance);
        info!("Check {} finished with {}", id, tier.provenance);

        AnalysisReport {
            id,
            data: tier.data,
            comparisons: tier.comparisons,
            provenance: tier.provenance,
            note: tier.note,
            error_kind,
            error_detail,
            article_title: article.title.clone(),
            credibility: source_credibility(&article.title),
            bias: "Unknown".to_string(),
            is_news_site: article
                .url
                .as_deref()
                .is_some_and(|url| self.news_sites.is_news_site(url)),
            backend_attempts: attempts,
        }
    }

    async fn fall_back(
        &self,
        article: &Article,
        text: &str,
        error: &BackendError,
        kind: ErrorKind,
    ) -> TierResult {
        warn!("Backend unavailable ({}), trying AI fallback: {}", kind, error);
        let message = kind.user_message();

        let prompt = percentage_fallback_prompt(article.display_title(), text);
        let fallback = match self.llm.generate_text(&prompt).await {
            Ok(reply) => parse_percentage_reply(&reply).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match fallback {
            Ok(triple) => TierResult {
                data: AnalysisData::Results(triple),
                comparisons: None,
                provenance: Provenance::AiFallback,
                note: Some(format!("⚠️ {}, analysis provided by AI fallback", message)),
            },
            Err(reason) => {
                warn!("AI fallback failed, using estimated analysis: {}", reason);
                TierResult {
                    data: AnalysisData::Results(synthetic_estimate(&mut rand::rng())),
                    comparisons: None,
                    provenance: Provenance::Estimated,
                    note: Some(format!("⚠️ {}, showing estimated analysis", message)),
                }
            }
        }
    }
}
