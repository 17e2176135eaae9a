// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use super::article::Article;

/// 分析会话上下文
///
/// 保存最近一次分析的文章，显式传递给需要它的用例。
/// 每次新的分析会整体替换旧文章，不保留历史。
#[derive(Debug, Clone, Default)]
pub struct AnalysisSession {
    last_article: Option<Arc<Article>>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录最新分析的文章
    pub fn remember(&mut self, article: Arc<Article>) {
        self.last_article = Some(article);
    }

    pub fn last_article(&self) -> Option<&Arc<Article>> {
        self.last_article.as_ref()
    }

    /// 有正文可用的最近文章
    pub fn article_with_text(&self) -> Option<&Arc<Article>> {
        self.last_article.as_ref().filter(|article| article.has_text())
    }
}
