// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 与外部系统交互的技术实现：分析后端客户端、重试包装、状态探测、
/// 会话存储以及监控指标
pub mod backend_client;
pub mod metrics;
pub mod resilient_backend;
pub mod session_store;
pub mod status_probe;
