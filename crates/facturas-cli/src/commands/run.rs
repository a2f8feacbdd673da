//! Run command: scan a directory tree and write the summary table.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use facturas_core::models::record::ExtractedRecord;
use facturas_core::{
    DocumentCollector, FieldExtractor, OnError, OutputFormat, PdfTextSource, TableWriter,
};

use super::load_config;

/// Arguments for the run command.
#[derive(Args, Default)]
pub struct RunArgs {
    /// Base directory to scan (default: facturas)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (default: facturas_extraidas.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<TableFormat>,

    /// Skip unreadable documents instead of aborting
    #[arg(long)]
    continue_on_error: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum TableFormat {
    /// Comma-separated values
    Csv,
    /// JSON array
    Json,
}

impl From<TableFormat> for OutputFormat {
    fn from(format: TableFormat) -> Self {
        match format {
            TableFormat::Csv => OutputFormat::Csv,
            TableFormat::Json => OutputFormat::Json,
        }
    }
}

pub fn run(args: RunArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(input) = args.input {
        config.input.base_dir = input;
    }
    if let Some(output) = args.output {
        config.output.path = output;
    }
    if let Some(format) = args.format {
        config.output.format = format.into();
    }
    if args.continue_on_error {
        config.errors.on_unreadable = OnError::Skip;
    }

    let base_dir = &config.input.base_dir;
    info!("Scanning {}", base_dir.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} documents {msg}")?,
    );

    let collector = DocumentCollector::from_config(&config.input)
        .with_on_error(config.errors.on_unreadable);
    let collection = collector
        .collect_with(base_dir, &PdfTextSource::new(), |path| {
            pb.set_message(path.display().to_string());
            pb.inc(1);
        })
        .with_context(|| format!("Failed to collect invoices from {}", base_dir.display()))?;

    pb.finish_and_clear();

    let extractor = FieldExtractor::new().with_supplier_width(config.extraction.supplier_width);
    let records: Vec<ExtractedRecord> = collection
        .documents
        .iter()
        .map(|document| {
            debug!("Extracting fields from {}", document.path.display());
            extractor.extract(&document.text)
        })
        .collect();

    let output_path = &config.output.path;
    TableWriter::new(config.output.format)
        .write_to_path(&records, output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!(
        "Extracted {} records in {:?} ({} skipped)",
        records.len(),
        start.elapsed(),
        collection.failures.len()
    );

    println!(
        "{} Datos guardados en '{}'.",
        style("✓").green(),
        output_path.display()
    );

    if !collection.failures.is_empty() {
        println!();
        println!("{}", style("Skipped files:").red());
        for failure in &collection.failures {
            println!("  - {}: {}", failure.path.display(), failure.reason);
        }
    }

    Ok(())
}
