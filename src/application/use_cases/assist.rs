// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::application::dto::assist_request::AssistResponseDto;
use crate::domain::models::session::AnalysisSession;
use crate::domain::services::llm_service::{LLMServiceTrait, LlmError};
use crate::domain::services::prompts::{summary_prompt, translation_prompt};
use crate::utils::text::truncate_chars;

#[derive(Error, Debug)]
pub enum AssistError {
    #[error("No article content available to summarize.")]
    NothingToSummarize,
    #[error("No article content or target language available for translation.")]
    NothingToTranslate,
    #[error(transparent)]
    Llm(#[from] LlmError),
}

/// 针对会话中最近文章的摘要与翻译
pub struct AssistUseCase {
    llm: Arc<dyn LLMServiceTrait>,
    max_chars: usize,
}

impl AssistUseCase {
    pub fn new(llm: Arc<dyn LLMServiceTrait>, max_chars: usize) -> Self {
        Self { llm, max_chars }
    }

    pub async fn summarize(&self, session: &AnalysisSession) -> Result<AssistResponseDto, AssistError> {
        let article = session
            .article_with_text()
            .ok_or(AssistError::NothingToSummarize)?;
        info!("Summarizing article: {:?}", article.title);

        let text = truncate_chars(&article.text_content, self.max_chars);
        let output = self.llm.generate_text(&summary_prompt(text)).await?;

        Ok(AssistResponseDto {
            article_title: article.title.clone(),
            output,
        })
    }

    pub async fn translate(
        &self,
        session: &AnalysisSession,
        target_lang: &str,
    ) -> Result<AssistResponseDto, AssistError> {
        let target_lang = target_lang.trim();
        let article = session
            .article_with_text()
            .filter(|_| !target_lang.is_empty())
            .ok_or(AssistError::NothingToTranslate)?;
        info!("Translating article {:?} to {}", article.title, target_lang);

        let text = truncate_chars(&article.text_content, self.max_chars);
        let output = self
            .llm
            .generate_text(&translation_prompt(text, target_lang))
            .await?;

        Ok(AssistResponseDto {
            article_title: article.title.clone(),
            output,
        })
    }
}
