// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 抓取网页、提取正文并提交给分析服务，打印返回的 JSON
//!
//! 用法：`read-website <url> [service-url]`

use anyhow::{bail, Context};
use factlens::config::settings::Settings;
use factlens::engines::fetch_engine::FetchEngine;
use factlens::engines::readability::ReadabilityExtractor;
use factlens::engines::traits::ArticleExtractor;
use factlens::utils::telemetry;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry();

    let mut args = std::env::args().skip(1);
    let Some(url) = args.next() else {
        bail!("usage: read-website <url> [service-url]");
    };

    let settings = Settings::new()?;
    let service_url = args
        .next()
        .unwrap_or_else(|| settings.analysis.service_url.clone());

    let fetcher = FetchEngine::new(Duration::from_secs(settings.analysis.fetch_timeout_secs));
    let html = fetcher.fetch_html(&url).await?;

    let extractor = ReadabilityExtractor::new(settings.analysis.min_article_chars);
    let article = extractor.extract(&html, Some(&url))?;
    info!(
        "Extracted {:?} ({} chars), sending to {}",
        article.title,
        article.text_content.chars().count(),
        service_url
    );

    let response = reqwest::Client::new()
        .post(&service_url)
        .json(&json!({ "text": article.text_content }))
        .send()
        .await
        .with_context(|| format!("failed to reach analysis service at {}", service_url))?;

    let status = response.status();
    let body: Value = response
        .json()
        .await
        .context("analysis service returned invalid JSON")?;
    if !status.is_success() {
        bail!("analysis service returned {}: {}", status, body);
    }

    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
