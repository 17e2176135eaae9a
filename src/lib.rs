// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 文章检查、独立分析、摘要与翻译等用例
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 核心模型、百分比归一化、兜底策略与模型调用
pub mod domain;

/// 引擎模块
///
/// 页面抓取与正文提取
pub mod engines;

/// 基础设施模块
///
/// 分析后端客户端、重试、状态探测、会话存储与指标
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由、处理器和错误映射
pub mod presentation;

/// 工具模块
///
/// 重试状态机、JSON 提取、文本处理与日志初始化
pub mod utils;
