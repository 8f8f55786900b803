//! # bactopedia
//!
//! A library for answering free-text bacteria queries with structured information.
//!
//! Users type names in many shapes: full binomials ("Escherichia coli"), abbreviated
//! genera ("E. coli", "e coli"), common names ("golden staph") or outright typos.
//! `bactopedia` resolves them against a small curated catalog first and falls back
//! to a Wikipedia search for anything the catalog does not know.
//!
//! ## Features
//!
//! - **Alias matching**: Substring lookup over canonical keys, display names and
//!   aliases, insensitive to case and to periods in abbreviations
//! - **Encyclopedic fallback**: Wikipedia search + intro extract, accepted only when
//!   the text reads like a description of a bacterium
//! - **Input validation**: Rejects empty input, digits, odd characters and text that
//!   does not look bacteria-related, with a human-readable reason
//! - **Suggestions**: "Did you mean" candidates ranked by Ratcliff/Obershelp similarity
//!
//! ## Example
//!
//! ```rust,no_run
//! use bactopedia::{BacteriaCatalog, QueryEngine, QueryOutcome};
//! use bactopedia::external::{ExternalSource, WikipediaConfig};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let catalog = BacteriaCatalog::load_embedded()?;
//! let wikipedia = ExternalSource::from_config(WikipediaConfig::default(), false)?;
//! let engine = QueryEngine::new(&catalog, &wikipedia);
//!
//! match engine.resolve("golden staph").await {
//!     QueryOutcome::LocalHit { record } => println!("{}", record.display_name),
//!     QueryOutcome::ExternalHit { result } => println!("{} ({})", result.title, result.source_url),
//!     QueryOutcome::Invalid { reason } => println!("{reason}"),
//!     QueryOutcome::NotFound { suggestions } => println!("did you mean {suggestions:?}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Curated catalog storage
//! - [`core`]: Records, external results and query outcomes
//! - [`matching`]: Query engine, local matcher, relevance heuristics and suggestions
//! - [`external`]: Wikipedia fallback lookup
//! - [`utils`]: Input validation
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: Web server for browser-based lookup

pub mod catalog;
pub mod cli;
pub mod core;
pub mod external;
pub mod matching;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use catalog::store::BacteriaCatalog;
pub use core::outcome::{ExternalResult, QueryOutcome};
pub use core::record::BacteriumRecord;
pub use core::types::*;
pub use matching::engine::{QueryConfig, QueryEngine};
