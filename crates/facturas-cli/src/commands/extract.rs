//! Extract command - print the fields of a single document.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use facturas_core::{FieldExtractor, PdfTextSource, TextSource};

use super::load_config;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Document to read
    #[arg(required = true)]
    input: PathBuf,

    /// Also print the extracted text
    #[arg(long)]
    show_text: bool,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let text = PdfTextSource::new()
        .extract_text(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    if args.show_text {
        println!("{}", text);
        println!();
    }

    let record = FieldExtractor::new()
        .with_supplier_width(config.extraction.supplier_width)
        .extract(&text);

    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}
