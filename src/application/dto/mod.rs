// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义 HTTP 请求与响应的数据结构，在接口层和用例之间传递数据
pub mod analyze_request;
pub mod analyze_response;
pub mod assist_request;
pub mod check_request;
