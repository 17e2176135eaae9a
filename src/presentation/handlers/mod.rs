// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// 每个处理器负责解析请求、调用对应用例并返回 JSON 响应
pub mod analyze_handler;
pub mod assist_handler;
pub mod check_handler;
pub mod status_handler;
