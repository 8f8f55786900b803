//! Command-line interface for bactopedia.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **lookup**: Resolve a bacteria name against the catalog, falling back to Wikipedia
//! - **catalog**: List, show, or export records from the curated catalog
//! - **serve**: Start the web interface
//!
//! ## Usage
//!
//! ```text
//! # Look up a bacterium
//! bactopedia lookup E. coli
//!
//! # Catalog only, no network
//! bactopedia lookup "staph aurius" --offline
//!
//! # JSON output for scripting
//! bactopedia --format json lookup Yersinia pestis
//!
//! # Start web UI
//! bactopedia serve --port 8080 --open
//! ```

use clap::{Parser, Subcommand};
use std::time::Duration;

use crate::external::wikipedia::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::external::{ExternalSource, WikipediaConfig};

pub mod catalog;
pub mod lookup;

#[derive(Parser)]
#[command(name = "bactopedia")]
#[command(version)]
#[command(about = "Look up bacteria by scientific or common name")]
#[command(
    long_about = "bactopedia answers a free-text bacteria name with structured information.\n\nIt checks a curated catalog first (scientific names, common names and abbreviations such as \"E. coli\") and falls back to a Wikipedia search when the name is unknown. When nothing is found it suggests similar names from the catalog."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up a bacterium by name
    Lookup(lookup::LookupArgs),

    /// Inspect the curated catalog
    Catalog(catalog::CatalogArgs),

    /// Start the web server
    Serve(ServeArgs),
}

/// Options controlling the external (Wikipedia) lookup
#[derive(clap::Args, Clone, Debug)]
pub struct ExternalArgs {
    /// Only consult the curated catalog; never query Wikipedia
    #[arg(long)]
    pub offline: bool,

    /// MediaWiki Action API endpoint
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Timeout for each external request, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=120))]
    pub timeout_secs: u64,
}

impl ExternalArgs {
    /// Build the external source these options describe
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn to_source(&self) -> anyhow::Result<ExternalSource> {
        let config = WikipediaConfig {
            api_url: self.api_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            ..WikipediaConfig::default()
        };
        Ok(ExternalSource::from_config(config, self.offline)?)
    }
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<std::path::PathBuf>,

    #[command(flatten)]
    pub external: ExternalArgs,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
