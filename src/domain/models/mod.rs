// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 文章（article）：从页面提取出的可读内容
/// - 分析结果（analysis）：核查结果、百分比三元组、来源标记与报告
/// - 会话（session）：保存最近分析文章的显式上下文
pub mod analysis;
pub mod article;
pub mod session;
