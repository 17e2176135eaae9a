// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 提取出的文章
///
/// 提取完成后不再修改；会话中新的提取结果会整体替换旧值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// 标题
    pub title: String,
    /// 纯文本正文
    pub text_content: String,
    /// 正文 HTML
    pub content: String,
    /// 来源 URL
    pub url: Option<String>,
    /// 采集时间
    pub captured_at: DateTime<Utc>,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        text_content: impl Into<String>,
        content: impl Into<String>,
        url: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            text_content: text_content.into(),
            content: content.into(),
            url,
            captured_at: Utc::now(),
        }
    }

    /// 正文是否包含非空白文本
    pub fn has_text(&self) -> bool {
        !self.text_content.trim().is_empty()
    }

    /// 用于提示词的标题，缺失时给出占位
    pub fn display_title(&self) -> &str {
        let title = self.title.trim();
        if title.is_empty() {
            "No title"
        } else {
            title
        }
    }
}
