use serde::{Deserialize, Serialize};

use crate::errors::ApiErrorBody;

/// Parameters for [`Client::scrape`](crate::Client::scrape).
#[derive(Debug, Clone, Default)]
pub struct ScrapeParams {
    /// Page URL to scrape. Required.
    pub url: String,
    /// Strip hyperlinks from the returned markdown.
    pub no_links: bool,
    /// Preferred content language (ISO 639-1).
    pub lang: Option<String>,
}

impl ScrapeParams {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

/// A scraped page: markdown content plus the links found on it.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeResult {
    pub url: String,
    /// Page content as markdown.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "ogUrl")]
    pub og_url: String,
    #[serde(default, rename = "countCharacters")]
    pub count_characters: u64,
    #[serde(default)]
    pub urls: Vec<String>,
}

/// Parameters for [`Client::map`](crate::Client::map).
#[derive(Debug, Clone, Default)]
pub struct MapParams {
    /// Site URL to map. Required.
    pub url: String,
    pub no_links: bool,
    pub lang: Option<String>,
}

impl MapParams {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

/// Every URL discovered on a site.
#[derive(Debug, Clone, Deserialize)]
pub struct MapResult {
    #[serde(default)]
    pub urls: Vec<String>,
}

/// JSON body of a crawl start request.
#[derive(Debug, Clone, Serialize)]
pub struct CrawlRequest {
    pub url: String,
    /// Maximum number of pages to crawl.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl CrawlRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            limit: None,
        }
    }
}

/// Handle for a started crawl job.
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlJob {
    #[serde(rename = "jobId")]
    pub job_id: String,
}

/// State of a crawl job. Crawls add `scraping` and `cancelled` to the usual
/// terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrawlStatus {
    Scraping,
    Completed,
    Failed,
    Cancelled,
}

/// One crawled page. Same shape as [`ScrapeResult`] minus the link list.
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlPage {
    pub url: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "ogUrl")]
    pub og_url: String,
    #[serde(default, rename = "countCharacters")]
    pub count_characters: u64,
}

/// Response of a crawl job poll.
///
/// `completed` populates `pages` (and `next` when more pages remain beyond
/// the requested window); `failed` populates `error`.
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlResult {
    pub status: CrawlStatus,
    #[serde(default)]
    pub pages: Vec<CrawlPage>,
    /// Absolute URL of the next page window, when the result is truncated.
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crawl_request_omits_unset_limit() {
        let body = serde_json::to_value(CrawlRequest::new("https://example.com")).unwrap();
        assert_eq!(body["url"], "https://example.com");
        assert!(body.get("limit").is_none());

        let with_limit = CrawlRequest {
            url: "https://example.com".into(),
            limit: Some(500),
        };
        let body = serde_json::to_value(with_limit).unwrap();
        assert_eq!(body["limit"], 500);
    }

    #[test]
    fn crawl_status_decodes_all_states() {
        for (wire, expected) in [
            ("scraping", CrawlStatus::Scraping),
            ("completed", CrawlStatus::Completed),
            ("failed", CrawlStatus::Failed),
            ("cancelled", CrawlStatus::Cancelled),
        ] {
            let parsed: CrawlStatus = serde_json::from_str(&format!("\"{wire}\"")).unwrap();
            assert_eq!(parsed, expected);
        }
    }

    #[test]
    fn crawl_result_tolerates_status_only_body() {
        let result: CrawlResult = serde_json::from_str(r#"{"status":"scraping"}"#).unwrap();
        assert_eq!(result.status, CrawlStatus::Scraping);
        assert!(result.pages.is_empty());
        assert!(result.next.is_none());
    }
}
