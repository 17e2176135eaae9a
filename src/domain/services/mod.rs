// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 兜底（fallback）：解析模型给出的百分比、生成估算结果
/// - LLM服务（llm_service）：调用生成式文本接口
/// - 百分比（percentages）：统一的归一化规则
/// - 提示词（prompts）：各类分析所用的提示词
/// - 来源评估（source_rating）：来源可信度与新闻站点识别
pub mod fallback;
pub mod llm_service;
pub mod percentages;
pub mod prompts;
pub mod source_rating;
