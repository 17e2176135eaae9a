// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::domain::models::analysis::Credibility;

static RELIABLE_SOURCES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(BBC|Reuters|AP|NPR|New York Times)\b").expect("reliable sources regex")
});
static UNRELIABLE_SOURCES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(Breitbart|Infowars|Daily Mail)\b").expect("unreliable sources regex")
});

/// 内置新闻站点域名
pub const DEFAULT_NEWS_DOMAINS: &[&str] = &[
    "nytimes.com",
    "bbc.com",
    "bbc.co.uk",
    "cnn.com",
    "reuters.com",
    "wsj.com",
    "theguardian.com",
    "washingtonpost.com",
    "foxnews.com",
    "apnews.com",
    "bloomberg.com",
    "politico.com",
    "huffpost.com",
    "usatoday.com",
    "latimes.com",
    "chicagotribune.com",
    "npr.org",
    "cbsnews.com",
    "nbcnews.com",
    "abcnews.go.com",
    "time.com",
    "newsweek.com",
    "economist.com",
    "forbes.com",
    "businessinsider.com",
    "techcrunch.com",
    "wired.com",
    "engadget.com",
    "theverge.com",
    "arstechnica.com",
    "zdnet.com",
    "cnet.com",
    "axios.com",
    "vice.com",
    "vox.com",
    "medium.com",
    "substack.com",
];

/// 根据标题中出现的媒体名称粗略评估来源可信度
///
/// 按整词、大小写不敏感匹配；同时命中时可靠来源优先
pub fn source_credibility(title: &str) -> Credibility {
    if RELIABLE_SOURCES.is_match(title) {
        Credibility::High
    } else if UNRELIABLE_SOURCES.is_match(title) {
        Credibility::Low
    } else {
        Credibility::Medium
    }
}

/// 新闻站点识别
#[derive(Debug, Clone)]
pub struct NewsSiteDetector {
    domains: Vec<String>,
}

impl Default for NewsSiteDetector {
    fn default() -> Self {
        Self::new(DEFAULT_NEWS_DOMAINS.iter().map(|d| d.to_string()).collect())
    }
}

impl NewsSiteDetector {
    pub fn new(domains: Vec<String>) -> Self {
        Self {
            domains: domains
                .into_iter()
                .map(|d| d.trim().to_lowercase())
                .filter(|d| !d.is_empty())
                .collect(),
        }
    }

    /// 主机名包含任一已知新闻域名即视为新闻站点；无法解析的 URL 返回 false
    pub fn is_news_site(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        let Some(host) = parsed.host_str() else {
            return false;
        };
        let host = host.to_lowercase();
        self.domains.iter().any(|domain| host.contains(domain.as_str()))
    }
}
