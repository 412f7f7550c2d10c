//! Third-party news client (newsapi.org)
//!
//! Fetch only: this talks to the `/v2/everything` endpoint and hands back
//! typed articles. Re-categorizing articles by keyword is presentation-side
//! and deliberately not done here.

use leadgate_core::{ApiError, DiagnosticLog};
use serde::Deserialize;

/// newsapi.org base URL.
pub const NEWS_API_BASE: &str = "https://newsapi.org/v2";

/// Query for the `everything` endpoint.
#[derive(Clone, Debug)]
pub struct NewsQuery {
    /// Search expression.
    pub q: String,
    /// Article language, e.g. `"en"`.
    pub language: String,
    /// Sort order, e.g. `"publishedAt"`.
    pub sort_by: String,
    /// Page size cap.
    pub page_size: u32,
}

impl Default for NewsQuery {
    fn default() -> Self {
        Self {
            q: String::new(),
            language: "en".to_string(),
            sort_by: "publishedAt".to_string(),
            page_size: 30,
        }
    }
}

/// One article as the provider reports it.
#[derive(Clone, Debug, Deserialize)]
pub struct NewsArticle {
    /// Publishing outlet.
    pub source: NewsSource,
    /// Byline, when known.
    #[serde(default)]
    pub author: Option<String>,
    /// Headline.
    pub title: String,
    /// Short summary.
    #[serde(default)]
    pub description: Option<String>,
    /// Canonical article URL.
    pub url: String,
    /// Lead image URL.
    #[serde(default, rename = "urlToImage")]
    pub url_to_image: Option<String>,
    /// Publication timestamp, RFC 3339.
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    /// Truncated body text.
    #[serde(default)]
    pub content: Option<String>,
}

/// Article source reference.
#[derive(Clone, Debug, Deserialize)]
pub struct NewsSource {
    /// Provider id, when registered.
    #[serde(default)]
    pub id: Option<String>,
    /// Display name.
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    articles: Vec<NewsArticle>,
}

/// Client for the third-party news aggregation API.
#[derive(Clone, Debug)]
pub struct NewsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    diagnostics: DiagnosticLog,
}

impl NewsClient {
    /// Client against the public provider.
    pub fn new(api_key: impl Into<String>, diagnostics: DiagnosticLog) -> Self {
        Self::with_base_url(NEWS_API_BASE, api_key, diagnostics)
    }

    /// Client against an alternate base URL (tests point this at a mock).
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        diagnostics: DiagnosticLog,
    ) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into(),
            api_key: api_key.into(),
            diagnostics,
        }
    }

    /// Search articles. Failures are classified and recorded like any other
    /// submission failure.
    pub async fn everything(&self, query: &NewsQuery) -> Result<Vec<NewsArticle>, ApiError> {
        let page_size = query.page_size.to_string();
        let params = [
            ("q", query.q.as_str()),
            ("language", query.language.as_str()),
            ("sortBy", query.sort_by.as_str()),
            ("pageSize", page_size.as_str()),
            ("apiKey", self.api_key.as_str()),
        ];

        let url = format!("{}/everything", self.base_url);
        let response = match self.http.get(&url).query(&params).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = %err, "news request did not reach the provider");
                let error = ApiError::network();
                self.diagnostics.record("news.everything", error.clone());
                return Err(error);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let error = ApiError::from_status(status.as_u16(), None);
            self.diagnostics.record("news.everything", error.clone());
            return Err(error);
        }

        let parsed: EverythingResponse = match response.json().await {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!(error = %err, "unparseable news response");
                let error = ApiError::malformed_response();
                self.diagnostics.record("news.everything", error.clone());
                return Err(error);
            }
        };

        if parsed.status != "ok" {
            let error = ApiError::rejected("News provider reported an error.");
            self.diagnostics.record("news.everything", error.clone());
            return Err(error);
        }

        Ok(parsed.articles)
    }
}
