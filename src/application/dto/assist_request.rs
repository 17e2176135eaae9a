// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 翻译请求
#[derive(Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequestDto {
    /// 目标语言，例如 `French` 或 `zh-CN`
    #[serde(alias = "target_lang")]
    #[validate(length(max = 64))]
    pub target_lang: String,
}

/// 摘要或翻译结果
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistResponseDto {
    pub article_title: String,
    pub output: String,
}
