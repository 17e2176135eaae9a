// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::utils::retry_policy::RetryPolicy;

/// 应用程序配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 分析后端配置
    pub backend: BackendSettings,
    /// 生成式模型配置
    pub llm: LlmSettings,
    /// 分析流程配置
    pub analysis: AnalysisSettings,
    /// 指标导出配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 分析后端配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    /// 后端 `/analyze` 端点
    pub analyze_url: String,
    /// 最大尝试次数
    pub max_attempts: u32,
    /// 初始退避时间（毫秒）
    pub initial_backoff_ms: u64,
    /// 最大退避时间（毫秒）
    pub max_backoff_ms: u64,
    /// 单次尝试超时（秒）
    pub attempt_timeout_secs: u64,
    /// 状态探测超时（秒）
    pub status_timeout_secs: u64,
    /// 发送给后端的最大字符数
    pub max_text_chars: usize,
}

impl BackendSettings {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts.max(1),
            initial_backoff: Duration::from_millis(self.initial_backoff_ms),
            max_backoff: Duration::from_millis(self.max_backoff_ms),
            ..RetryPolicy::backend()
        }
    }

    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_secs(self.attempt_timeout_secs)
    }

    pub fn status_timeout(&self) -> Duration {
        Duration::from_secs(self.status_timeout_secs)
    }
}

/// 生成式模型配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    /// API 密钥
    pub api_key: Option<String>,
    /// 模型名称
    pub model: String,
    /// API 基础 URL
    pub api_base_url: String,
    /// 单次调用超时（秒）
    pub timeout_secs: u64,
}

impl LlmSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// 分析流程配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSettings {
    /// 独立分析服务发送给模型的最大字符数
    pub max_content_chars: usize,
    /// 摘要与翻译使用的最大字符数
    pub assist_max_chars: usize,
    /// 判定为文章所需的最少字符数
    pub min_article_chars: usize,
    /// 抓取网页的超时（秒）
    pub fetch_timeout_secs: u64,
    /// `read-website` 工具提交文本的分析服务地址
    pub service_url: String,
    /// 新闻站点域名列表，未设置时使用内置列表
    pub news_domains: Option<Vec<String>>,
    /// 最多保留的会话数，超出时淘汰最久未使用的会话
    pub session_capacity: usize,
}

/// 指标导出配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用 Prometheus 导出
    pub enabled: bool,
    /// 导出监听地址
    pub listen_addr: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 加载顺序：内置默认值、`config/default`、`config/{APP_ENVIRONMENT}`、
    /// `FACTLENS__` 前缀的环境变量。`llm.api_key` 未配置时回退到 `GEMINI_API_KEY`。
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("FACTLENS").separator("__"));

        let mut settings: Settings = builder.build()?.try_deserialize()?;
        if settings.llm.api_key.as_deref().map_or(true, str::is_empty) {
            settings.llm.api_key = std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
        }
        Ok(settings)
    }

    /// 仅由内置默认值构成的配置
    pub fn from_defaults() -> Result<Self, ConfigError> {
        Self::defaults()?.build()?.try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("backend.analyze_url", "http://127.0.0.1:8081/analyze")?
            .set_default("backend.max_attempts", 3)?
            .set_default("backend.initial_backoff_ms", 1000)?
            .set_default("backend.max_backoff_ms", 5000)?
            .set_default("backend.attempt_timeout_secs", 25)?
            .set_default("backend.status_timeout_secs", 5)?
            .set_default("backend.max_text_chars", 3000)?
            .set_default("llm.model", "gemini-1.5-pro")?
            .set_default(
                "llm.api_base_url",
                "https://generativelanguage.googleapis.com/v1beta",
            )?
            .set_default("llm.timeout_secs", 30)?
            .set_default("analysis.max_content_chars", 15000)?
            .set_default("analysis.assist_max_chars", 4000)?
            .set_default("analysis.min_article_chars", 100)?
            .set_default("analysis.fetch_timeout_secs", 20)?
            .set_default("analysis.service_url", "http://127.0.0.1:8080/analyze")?
            .set_default("analysis.session_capacity", 1024)?
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen_addr", "0.0.0.0:9000")
    }
}
