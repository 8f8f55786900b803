use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::core::outcome::ExternalResult;
use crate::core::types::{title_case, SourceLabel};
use crate::external::{mentions_bacteria, search_term, ExternalError, ExternalLookup};

/// MediaWiki Action API endpoint of English Wikipedia
pub const DEFAULT_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Per-request timeout for the external lookup
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Page URL used when the API does not report one
const PAGE_ID_URL_PREFIX: &str = "https://en.wikipedia.org/?curid=";

/// Connection settings for the Wikipedia lookup
#[derive(Debug, Clone)]
pub struct WikipediaConfig {
    /// Action API endpoint (`.../w/api.php`)
    pub api_url: String,
    /// Timeout applied to each request
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for WikipediaConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("bactopedia/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    pageid: u64,
}

#[derive(Debug, Deserialize)]
struct PageResponse {
    query: Option<PageQuery>,
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    #[serde(default)]
    pages: HashMap<String, Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    title: Option<String>,
    extract: Option<String>,
    fullurl: Option<String>,
}

/// Resolves queries through Wikipedia full-text search and page intro extracts.
///
/// The top search hit is fetched as plain text and accepted only if it reads like
/// a description of a bacterium. Results are never cached.
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    http: Client,
    config: WikipediaConfig,
}

impl WikipediaClient {
    /// Build a client with its own connection pool
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed (e.g. TLS backend
    /// initialization fails).
    pub fn new(config: WikipediaConfig) -> Result<Self, ExternalError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { http, config })
    }

    async fn try_lookup(&self, query: &str) -> Result<Option<ExternalResult>, ExternalError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        let term = search_term(query);
        let Some(page_id) = self.search(&term).await? else {
            tracing::debug!("No search results for {:?}", term);
            return Ok(None);
        };

        let Some(page) = self.fetch_page(page_id).await? else {
            tracing::debug!("Page {} missing from content response", page_id);
            return Ok(None);
        };

        let extract = page.extract.unwrap_or_default();
        if extract.trim().is_empty() {
            tracing::debug!("Page {} has no extract", page_id);
            return Ok(None);
        }

        if !mentions_bacteria(&extract) {
            tracing::debug!("Page {} does not describe a bacterium", page_id);
            return Ok(None);
        }

        Ok(Some(ExternalResult {
            title: page.title.unwrap_or_else(|| title_case(query)),
            description: extract,
            source_label: SourceLabel::Wikipedia,
            source_url: page
                .fullurl
                .unwrap_or_else(|| format!("{PAGE_ID_URL_PREFIX}{page_id}")),
        }))
    }

    /// Page id of the top-ranked search hit
    async fn search(&self, term: &str) -> Result<Option<u64>, ExternalError> {
        let response: SearchResponse = self
            .http
            .get(&self.config.api_url)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("list", "search"),
                ("srsearch", term),
                ("utf8", "1"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response
            .query
            .and_then(|q| q.search.into_iter().next())
            .map(|hit| hit.pageid))
    }

    /// Plain-text intro extract, title and canonical URL of a page
    async fn fetch_page(&self, page_id: u64) -> Result<Option<Page>, ExternalError> {
        let page_id_str = page_id.to_string();
        let response: PageResponse = self
            .http
            .get(&self.config.api_url)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("pageids", page_id_str.as_str()),
                ("prop", "extracts|info"),
                ("exintro", "1"),
                ("explaintext", "1"),
                ("inprop", "url"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let mut query = response.query.ok_or_else(|| {
            ExternalError::MalformedResponse("content response has no 'query' field".to_string())
        })?;
        Ok(query.pages.remove(&page_id_str))
    }
}

impl ExternalLookup for WikipediaClient {
    fn lookup(&self, query: &str) -> impl Future<Output = Option<ExternalResult>> + Send {
        async move {
            match self.try_lookup(query).await {
                Ok(result) => result,
                Err(e) => {
                    tracing::warn!("External lookup for {:?} failed: {}", query, e);
                    None
                }
            }
        }
    }
}
