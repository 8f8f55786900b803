use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::BacteriaCatalog;
use crate::cli::{ExternalArgs, OutputFormat};
use crate::core::outcome::QueryOutcome;
use crate::core::types::title_case;
use crate::matching::engine::{QueryConfig, QueryEngine};
use crate::matching::suggest::{DEFAULT_CUTOFF, DEFAULT_MAX_SUGGESTIONS};

#[derive(Args)]
pub struct LookupArgs {
    /// Bacteria name; several words are joined with single spaces
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Maximum number of "did you mean" suggestions
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_SUGGESTIONS)]
    pub max_suggestions: usize,

    /// Minimum similarity (0.0-1.0) for a suggestion
    #[arg(long, default_value_t = DEFAULT_CUTOFF, value_parser = parse_cutoff)]
    pub cutoff: f64,

    #[command(flatten)]
    pub external: ExternalArgs,
}

impl LookupArgs {
    /// The query as typed, words joined by spaces
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }
}

fn parse_cutoff(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("cutoff must be between 0.0 and 1.0, got {value}"))
    }
}

/// Execute lookup subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the runtime cannot start.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: LookupArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = if let Some(path) = &args.catalog {
        BacteriaCatalog::load_from_file(path)?
    } else {
        BacteriaCatalog::load_embedded()?
    };

    if verbose {
        eprintln!("Loaded catalog with {} records", catalog.len());
    }

    let external = args.external.to_source()?;
    if verbose && external.is_offline() {
        eprintln!("Offline: external lookup disabled");
    }

    let config = QueryConfig {
        suggestion_cutoff: args.cutoff,
        max_suggestions: args.max_suggestions,
    };
    let engine = QueryEngine::with_config(&catalog, &external, config);

    let query = args.query_text();
    let rt = tokio::runtime::Runtime::new()?;
    let outcome = rt.block_on(engine.resolve(&query));

    match format {
        OutputFormat::Text => print!("{}", render_text(&outcome)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        OutputFormat::Tsv => print!("{}", render_tsv(&outcome)),
    }

    Ok(())
}

/// Human-readable rendering of an outcome
pub fn render_text(outcome: &QueryOutcome) -> String {
    let mut out = String::new();
    match outcome {
        QueryOutcome::LocalHit { record } => {
            out.push_str(&format!("Here's what I know about {}:\n", record.display_name));
            out.push_str("\nScientific Classification\n");
            out.push_str(&format!("{}\n", record.classification));
            out.push_str("\nDetailed Information\n");
            out.push_str(&format!("{}\n", record.description));
        }
        QueryOutcome::ExternalHit { result } => {
            out.push_str(&format!("Here's what I found about {}:\n", result.title));
            out.push_str("\nDescription\n");
            out.push_str(&format!("{}\n", result.description));
            out.push_str(&format!(
                "\nSource: {} ({})\n",
                result.source_label, result.source_url
            ));
        }
        QueryOutcome::Invalid { reason } => {
            out.push_str(&format!("{reason}\n"));
        }
        QueryOutcome::NotFound { suggestions } => {
            out.push_str("Sorry, I couldn't find information about that bacteria.\n");
            if !suggestions.is_empty() {
                out.push_str("\nDid you mean one of these?\n");
                for name in suggestions {
                    out.push_str(&format!("- {}\n", title_case(name)));
                }
            }
            out.push_str("\nSuggestions:\n");
            out.push_str("- Check the spelling\n");
            out.push_str(
                "- Try using the scientific name (e.g., 'Escherichia coli' instead of 'E coli')\n",
            );
            out.push_str("- Run 'bactopedia catalog list' to see the curated bacteria\n");
        }
    }
    out
}

/// Tab-separated rendering: a header row and one data row
pub fn render_tsv(outcome: &QueryOutcome) -> String {
    let (name, detail) = match outcome {
        QueryOutcome::LocalHit { record } => {
            (record.display_name.clone(), record.classification.clone())
        }
        QueryOutcome::ExternalHit { result } => (result.title.clone(), result.source_url.clone()),
        QueryOutcome::Invalid { reason } => (String::new(), reason.clone()),
        QueryOutcome::NotFound { suggestions } => (String::new(), suggestions.join(",")),
    };
    format!("outcome\tname\tdetail\n{}\t{name}\t{detail}\n", outcome.kind())
}
