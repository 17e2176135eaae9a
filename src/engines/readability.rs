// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::domain::models::article::Article;
use crate::engines::traits::{ArticleExtractor, ExtractionError};
use crate::utils::text::collapse_whitespace;

static OG_TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[property="og:title"]"#).expect("og:title selector"));
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").expect("title selector"));
static HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").expect("h1 selector"));
static CONTAINERS: Lazy<Vec<Selector>> = Lazy::new(|| {
    ["article", "main", r#"[role="main"]"#, "body"]
        .iter()
        .map(|s| Selector::parse(s).expect("container selector"))
        .collect()
});
static BLOCKS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p, h2, h3, li, blockquote, pre").expect("block selector"));

/// 位于这些元素内部的文本不属于正文
const SKIPPED_ANCESTORS: &[&str] = &[
    "script", "style", "noscript", "nav", "header", "footer", "aside", "form", "figcaption",
];

/// 轻量级可读性提取器
///
/// 优先选取 `article`/`main` 容器，收集其中的段落类元素作为正文；
/// 可读文本不超过 `min_text_chars` 个字符时报告没有文章
#[derive(Debug, Clone)]
pub struct ReadabilityExtractor {
    min_text_chars: usize,
}

impl Default for ReadabilityExtractor {
    fn default() -> Self {
        Self::new(100)
    }
}

impl ReadabilityExtractor {
    pub fn new(min_text_chars: usize) -> Self {
        Self { min_text_chars }
    }

    fn title(document: &Html) -> String {
        let og_title = document
            .select(&OG_TITLE)
            .filter_map(|e| e.value().attr("content"))
            .map(collapse_whitespace)
            .find(|t| !t.is_empty());

        og_title
            .or_else(|| first_text(document, &TITLE))
            .or_else(|| first_text(document, &HEADING))
            .unwrap_or_default()
    }

    fn container(document: &Html) -> Option<ElementRef<'_>> {
        CONTAINERS
            .iter()
            .find_map(|selector| document.select(selector).next())
    }

    fn readable_text(container: ElementRef<'_>) -> String {
        let blocks: Vec<String> = container
            .select(&BLOCKS)
            .filter(|block| !has_skipped_ancestor(*block))
            // Nested blocks (li > p) would otherwise be counted twice
            .filter(|block| {
                !block
                    .ancestors()
                    .filter_map(ElementRef::wrap)
                    .take_while(|a| a.id() != container.id())
                    .any(|a| BLOCKS.matches(&a))
            })
            .map(|block| collapse_whitespace(&block.text().collect::<String>()))
            .filter(|text| !text.is_empty())
            .collect();

        if blocks.is_empty() {
            collapse_whitespace(&container.text().collect::<String>())
        } else {
            blocks.join("\n\n")
        }
    }
}

impl ArticleExtractor for ReadabilityExtractor {
    fn extract(&self, html: &str, url: Option<&str>) -> Result<Article, ExtractionError> {
        let document = Html::parse_document(html);
        let title = Self::title(&document);
        let container = Self::container(&document).ok_or(ExtractionError::NoArticle)?;

        let text = Self::readable_text(container);
        let text_chars = text.chars().count();
        debug!(
            "Readability parse result: title={:?}, text_length={}",
            title, text_chars
        );

        if text_chars <= self.min_text_chars {
            return Err(ExtractionError::NoArticle);
        }

        Ok(Article::new(
            title,
            text,
            container.inner_html(),
            url.map(str::to_string),
        ))
    }

    fn name(&self) -> &'static str {
        "readability"
    }
}

fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .map(|e| collapse_whitespace(&e.text().collect::<String>()))
        .find(|t| !t.is_empty())
}

fn has_skipped_ancestor(element: ElementRef<'_>) -> bool {
    element
        .ancestors()
        .filter_map(|node| node.value().as_element())
        .any(|e| SKIPPED_ANCESTORS.contains(&e.name()))
}
