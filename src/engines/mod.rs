// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 内容引擎模块
///
/// 负责抓取页面并从 HTML 中提取可读文章
pub mod fetch_engine;
pub mod readability;
pub mod traits;
