// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use thiserror::Error;
use tracing::error;

use crate::domain::models::article::Article;

/// 内容提取错误类型
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// 页面中没有可读的文章内容
    #[error("Could not extract article content. This might not be a news article or the content is not parsable.")]
    NoArticle,
    /// 抓取页面失败
    #[error("Failed to fetch page: {0}")]
    Fetch(String),
    /// 提取任务异常终止
    #[error("An unexpected error occurred: {0}")]
    Runtime(String),
}

/// 文章提取器
///
/// 从 HTML 中提取标题、纯文本和正文 HTML
pub trait ArticleExtractor: Send + Sync {
    fn extract(&self, html: &str, url: Option<&str>) -> Result<Article, ExtractionError>;

    /// 获取提取器名称
    fn name(&self) -> &'static str;
}

/// 在阻塞线程池中运行提取器，避免解析大页面时占用异步工作线程
///
/// 提取任务异常终止时返回 [`ExtractionError::Runtime`]
pub async fn extract_blocking(
    extractor: Arc<dyn ArticleExtractor>,
    html: String,
    url: Option<String>,
) -> Result<Article, ExtractionError> {
    let name = extractor.name();
    tokio::task::spawn_blocking(move || extractor.extract(&html, url.as_deref()))
        .await
        .map_err(|e| {
            error!("{} extractor task failed: {}", name, e);
            ExtractionError::Runtime(format!("{} extractor failed: {}", name, e))
        })?
}
