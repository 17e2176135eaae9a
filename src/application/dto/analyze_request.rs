// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 独立分析请求
///
/// `text`、`html`、`url` 三选一，按此顺序取第一个非空值
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct AnalyzeRequestDto {
    /// 待分析的纯文本
    pub text: Option<String>,
    /// 页面地址，未提供正文时抓取并提取
    #[validate(url)]
    pub url: Option<String>,
    /// 页面 HTML，提供时直接提取正文
    pub html: Option<String>,
}
