//! Content acquisition: turn a URL or raw text into an [`ArticleRecord`].
//! A fetch or extraction failure surfaces as a collection error and aborts
//! that single request — no partial record is produced.

use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use spider_transformations::transformation::content::{
    transform_content_input, ReturnFormat, TransformConfig, TransformInput,
};
use tracing::{info, warn};

use firstpass_common::{url_domain, ArticleRecord, FirstPassError};

#[async_trait]
pub trait ContentCollector: Send + Sync {
    async fn collect(&self, url: &str) -> Result<ArticleRecord, FirstPassError>;
}

/// Build a record from pasted or uploaded plain text. Never fails; the gates
/// downstream decide whether the content is admissible.
pub fn collect_from_text(text: &str, title: &str) -> ArticleRecord {
    ArticleRecord::from_text(title, text)
}

/// Fetches the page over HTTP and runs Readability extraction to isolate the
/// article body.
pub struct HttpCollector {
    client: reqwest::Client,
}

impl HttpCollector {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .user_agent("Mozilla/5.0")
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

#[async_trait]
impl ContentCollector for HttpCollector {
    async fn collect(&self, url: &str) -> Result<ArticleRecord, FirstPassError> {
        info!(url, "Collecting article");

        let parsed = url::Url::parse(url)
            .map_err(|e| FirstPassError::Collection(format!("invalid URL {url}: {e}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(FirstPassError::Collection(format!(
                "only http/https URLs are allowed, got {}",
                parsed.scheme()
            )));
        }

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FirstPassError::Collection(format!("fetch failed for {url}: {e}")))?
            .error_for_status()
            .map_err(|e| FirstPassError::Collection(format!("fetch failed for {url}: {e}")))?;

        let html = resp
            .text()
            .await
            .map_err(|e| FirstPassError::Collection(format!("body read failed for {url}: {e}")))?;

        let title = extract_title(&html);
        let content = extract_main_content(&html, url);
        if content.trim().is_empty() {
            warn!(url, "Empty content after Readability extraction");
        }

        info!(url, bytes = content.len(), "Collected article");
        Ok(ArticleRecord::from_url(url, url_domain(url), title, content))
    }
}

/// The document `<title>`, whitespace-collapsed. Empty when the page has none.
pub fn extract_title(html: &str) -> String {
    let title_re = Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("valid regex");
    title_re
        .captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

fn extract_main_content(html: &str, url: &str) -> String {
    let parsed_url = url::Url::parse(url).ok();
    let config = TransformConfig {
        readability: true,
        main_content: true,
        return_format: ReturnFormat::Markdown,
        filter_images: true,
        filter_svg: true,
        clean_html: true,
    };
    let input = TransformInput {
        url: parsed_url.as_ref(),
        content: html.as_bytes(),
        screenshot_bytes: None,
        encoding: None,
        selector_config: None,
        ignore_tags: None,
    };

    transform_content_input(input, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use firstpass_common::ArticleSource;

    #[test]
    fn title_extraction_handles_attributes_and_whitespace() {
        assert_eq!(
            extract_title("<html><head><title data-x=\"1\">  Breaking\n  News </title></head></html>"),
            "Breaking News"
        );
        assert_eq!(extract_title("<html><body>no title</body></html>"), "");
    }

    #[test]
    fn text_collection_builds_a_manual_input_record() {
        let record = collect_from_text("some pasted article body", "A Title");
        assert_eq!(record.source, ArticleSource::ManualInput);
        assert_eq!(record.domain, "user_input");
        assert!(record.url.is_none());
        assert_eq!(record.title, "A Title");
    }
}
