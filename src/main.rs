// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use factlens::config::settings::Settings;
use factlens::infrastructure::metrics;
use factlens::presentation::routes::{self, AppServices};
use factlens::utils::telemetry;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting factlens...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    if settings.metrics.enabled {
        metrics::init_metrics(&settings.metrics.listen_addr);
    }

    if settings.llm.api_key.is_none() {
        warn!("No LLM API key configured; AI fallback and /analyze will be unavailable");
    }
    info!("Analysis backend: {}", settings.backend.analyze_url);

    // 3. Wire services and routes
    let app = routes::app(AppServices::from_settings(&settings));

    // 4. Start HTTP server
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
