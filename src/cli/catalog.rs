use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::store::BacteriaCatalog;
use crate::cli::OutputFormat;
use crate::core::types::RecordKey;
use crate::matching::normalize::normalize;
use crate::matching::suggest::SuggestionEngine;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all records in the catalog
    List {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Show details of a specific record
    Show {
        /// Canonical key (e.g., "escherichia coli")
        #[arg(required = true)]
        key: String,

        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom catalog file to export (defaults to embedded)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

/// Execute catalog subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, the record is unknown,
/// or the export cannot be written.
pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { catalog } => run_list(catalog, format, verbose),
        CatalogCommands::Show { key, catalog } => run_show(&key, catalog, format),
        CatalogCommands::Export { output, catalog } => run_export(output, catalog),
    }
}

fn load_catalog(path: Option<PathBuf>) -> anyhow::Result<BacteriaCatalog> {
    Ok(match path {
        Some(p) => BacteriaCatalog::load_from_file(&p)?,
        None => BacteriaCatalog::load_embedded()?,
    })
}

#[allow(clippy::needless_pass_by_value)]
fn run_list(
    catalog_path: Option<PathBuf>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;

    match format {
        OutputFormat::Text => {
            println!("Curated bacteria ({} records):\n", catalog.len());
            for record in &catalog.records {
                println!("  {:<28} {}", record.key.as_str(), record.display_name);
                if verbose && !record.aliases.is_empty() {
                    println!("  {:<28} aka: {}", "", record.aliases.join(", "));
                }
            }
        }
        OutputFormat::Json => {
            let records: Vec<serde_json::Value> = catalog
                .records
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "key": r.key,
                        "display_name": r.display_name,
                        "classification": r.classification,
                        "aliases": r.aliases,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        OutputFormat::Tsv => {
            println!("key\tdisplay_name\tclassification\taliases");
            for r in &catalog.records {
                println!(
                    "{}\t{}\t{}\t{}",
                    r.key,
                    r.display_name,
                    r.classification,
                    r.aliases.join(",")
                );
            }
        }
    }

    Ok(())
}

#[allow(clippy::needless_pass_by_value)]
fn run_show(
    key: &str,
    catalog_path: Option<PathBuf>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;

    let Some(record) = catalog.get(&RecordKey::new(normalize(key))) else {
        let suggestions = SuggestionEngine::new(&catalog).suggest(key);
        if suggestions.is_empty() {
            anyhow::bail!("Record not found: {key}");
        }
        anyhow::bail!(
            "Record not found: {key} (did you mean: {}?)",
            suggestions.join(", ")
        );
    };

    match format {
        OutputFormat::Text => {
            println!("Key: {}", record.key);
            println!("Name: {}", record.display_name);
            println!("Classification: {}", record.classification);
            if !record.aliases.is_empty() {
                println!("Aliases: {}", record.aliases.join(", "));
            }
            println!("\n{}", record.description);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(record)?);
        }
        OutputFormat::Tsv => {
            println!("key\tdisplay_name\tclassification\taliases");
            println!(
                "{}\t{}\t{}\t{}",
                record.key,
                record.display_name,
                record.classification,
                record.aliases.join(",")
            );
        }
    }

    Ok(())
}

fn run_export(output: PathBuf, catalog_path: Option<PathBuf>) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let json = catalog.to_json()?;
    std::fs::write(&output, json)?;
    println!(
        "Exported {} records to {}",
        catalog.len(),
        output.display()
    );
    Ok(())
}
