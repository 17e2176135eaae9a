// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 文章检查请求
///
/// 字段与浏览器端提取结果一致；只带 `html` 时由服务端提取正文
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequestDto {
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "text_content")]
    pub text_content: String,
    #[serde(default)]
    pub content: String,
    #[validate(url)]
    pub url: Option<String>,
    pub html: Option<String>,
}
