// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// 每个用例代表一个完整的业务流程：文章检查、独立分析、摘要与翻译
pub mod analyze_text;
pub mod assist;
pub mod check_article;
