// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{counter, describe_counter, describe_histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

use crate::domain::models::analysis::Provenance;

pub const BACKEND_ATTEMPTS_TOTAL: &str = "factlens_backend_attempts_total";
pub const BACKEND_DURATION_SECONDS: &str = "factlens_backend_duration_seconds";
pub const FALLBACK_TOTAL: &str = "factlens_fallback_total";
pub const LLM_REQUESTS_TOTAL: &str = "factlens_llm_requests_total";

/// 初始化指标系统
///
/// 安装 Prometheus 导出器并注册分析链路的各项指标。地址无法解析或端口被占用时
/// 只记录警告，服务照常启动。
pub fn init_metrics(listen_addr: &str) {
    let addr: SocketAddr = match listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address {}: {}", listen_addr, e);
            return;
        }
    };

    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!(
            "Failed to install Prometheus recorder: {}. This might happen if the port is already in use.",
            e
        );
        return;
    }

    describe_counter!(
        BACKEND_ATTEMPTS_TOTAL,
        "Total number of analysis backend attempts, including retries"
    );
    describe_histogram!(
        BACKEND_DURATION_SECONDS,
        "Wall time of a resilient backend call in seconds, backoff included"
    );
    describe_counter!(
        FALLBACK_TOTAL,
        "Total number of check results by tier (live, ai_fallback, estimated)"
    );
    describe_counter!(LLM_REQUESTS_TOTAL, "Total number of language model requests");

    info!("Metrics exporter listening on {}", addr);
}

/// 记录一次检查结果所在的降级层级
pub fn record_tier(provenance: Provenance) {
    let tier = match provenance {
        Provenance::Live => "live",
        Provenance::AiFallback => "ai_fallback",
        Provenance::Estimated => "estimated",
    };
    counter!(FALLBACK_TOTAL, "tier" => tier).increment(1);
}
