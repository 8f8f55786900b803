//! Fallback lookup against an external encyclopedic source.
//!
//! The [`ExternalLookup`] trait is the seam between the query pipeline and the
//! network. Implementations absorb every transport failure: a lookup either yields
//! an [`ExternalResult`] or nothing, never an error.
//!
//! - [`wikipedia::WikipediaClient`]: MediaWiki Action API search + intro extract
//! - [`ExternalSource`]: the source chosen at startup (Wikipedia, or offline)

use std::future::Future;

use thiserror::Error;

use crate::core::outcome::ExternalResult;

pub mod wikipedia;

pub use wikipedia::{WikipediaClient, WikipediaConfig};

/// Transport and decoding failures inside a lookup. Never leaves the resolver.
#[derive(Error, Debug)]
pub enum ExternalError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response: {0}")]
    MalformedResponse(String),
}

/// Terms of which at least one must appear in an extract for it to count as
/// describing a bacterium
pub const BACTERIA_INDICATORS: &[&str] = &[
    "bacteria",
    "bacterium",
    "gram-positive",
    "gram-negative",
    "species",
    "genus",
    "pathogen",
    "microorganism",
    "strain",
    "culture",
    "colony",
];

/// A source that can resolve queries the curated catalog does not know
pub trait ExternalLookup {
    /// Look a raw query up. `None` covers "no result", "not about bacteria"
    /// and every transport failure.
    fn lookup(&self, query: &str) -> impl Future<Output = Option<ExternalResult>> + Send;
}

/// External source selected from configuration
#[derive(Debug, Clone)]
pub enum ExternalSource {
    Wikipedia(WikipediaClient),
    /// Never reaches the network; every lookup misses
    Offline,
}

impl ExternalSource {
    /// Wikipedia source, or offline when `offline` is set
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: WikipediaConfig, offline: bool) -> Result<Self, ExternalError> {
        if offline {
            Ok(Self::Offline)
        } else {
            Ok(Self::Wikipedia(WikipediaClient::new(config)?))
        }
    }

    #[must_use]
    pub fn is_offline(&self) -> bool {
        matches!(self, Self::Offline)
    }
}

impl ExternalLookup for ExternalSource {
    fn lookup(&self, query: &str) -> impl Future<Output = Option<ExternalResult>> + Send {
        async move {
            match self {
                Self::Wikipedia(client) => client.lookup(query).await,
                Self::Offline => None,
            }
        }
    }
}

/// Search term sent to the provider: the query with "bacteria" appended
/// unless it already mentions it.
///
/// # Examples
///
/// ```
/// use bactopedia::external::search_term;
///
/// assert_eq!(search_term("Yersinia pestis"), "Yersinia pestis bacteria");
/// assert_eq!(search_term("Soil Bacteria"), "Soil Bacteria");
/// ```
#[must_use]
pub fn search_term(query: &str) -> String {
    let query = query.trim();
    if query.to_lowercase().contains("bacteria") {
        query.to_string()
    } else {
        format!("{query} bacteria")
    }
}

/// Whether an extract reads like a description of a bacterium
#[must_use]
pub fn mentions_bacteria(extract: &str) -> bool {
    let lower = extract.to_lowercase();
    BACTERIA_INDICATORS.iter().any(|term| lower.contains(term))
}
