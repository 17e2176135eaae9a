// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：文章、分析结果和会话
/// - 服务（services）：归一化、兜底解析、模型调用和来源评估
///
/// 领域层不依赖 HTTP 框架，便于独立测试。
pub mod models;
pub mod services;
