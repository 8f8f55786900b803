//! Query resolution: local matching, relevance heuristics and suggestions.
//!
//! - [`QueryEngine`]: Runs the full pipeline and produces a [`QueryOutcome`]
//! - [`LocalMatcher`]: Substring lookup over catalog keys, names and aliases
//! - [`RelevanceClassifier`]: Decides whether unknown text plausibly names a bacterium
//! - [`SuggestionEngine`]: "Did you mean" candidates ranked by string similarity
//!
//! ## Pipeline
//!
//! 1. **Local lookup**: the first catalog record (in catalog order) whose alias, key
//!    or display name contains the normalized query
//! 2. **External lookup**: search an encyclopedic source, keep the top hit if its
//!    summary reads like a bacterium
//! 3. **Validation**: reject empty input, digits, odd characters and text that does
//!    not look bacteria-related
//! 4. **Suggestions**: up to three catalog names with Ratcliff/Obershelp similarity
//!    of at least 0.6
//!
//! ## Example
//!
//! ```rust,no_run
//! use bactopedia::{BacteriaCatalog, QueryEngine, QueryOutcome};
//! use bactopedia::external::ExternalSource;
//!
//! # async fn run() {
//! let catalog = BacteriaCatalog::load_embedded().unwrap();
//! let engine = QueryEngine::new(&catalog, &ExternalSource::Offline);
//!
//! match engine.resolve("E. coli").await {
//!     QueryOutcome::LocalHit { record } => println!("{}", record.display_name),
//!     other => println!("{other:?}"),
//! }
//! # }
//! ```
//!
//! [`QueryOutcome`]: crate::core::outcome::QueryOutcome
//! [`QueryEngine`]: engine::QueryEngine
//! [`LocalMatcher`]: local::LocalMatcher
//! [`RelevanceClassifier`]: relevance::RelevanceClassifier
//! [`SuggestionEngine`]: suggest::SuggestionEngine

pub mod engine;
pub mod local;
pub mod normalize;
pub mod relevance;
pub mod similarity;
pub mod suggest;
