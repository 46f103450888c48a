use anyhow::{Context, Result};
use clap::Parser;
use qrcgen::{ResourceCollection, generate_qrc_xml};
use std::io::Write;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Print a Qt .qrc file embedding the compiled (.qm) form of .ts translations", long_about = None)]
struct Cli {
    /// Translation source files (.ts)
    #[arg(value_name = "FILENAMES", required = true, num_args = 1..)]
    filenames: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries the document only.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // The whole document is built before anything is printed, so a bad name
    // never leaves partial output behind.
    let rcc = ResourceCollection::translations(&cli.filenames)?;
    let xml = generate_qrc_xml(&rcc)?;
    tracing::info!(files = rcc.len(), prefix = %rcc.group.prefix, "generated resource collection");

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(xml.as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write resource collection to stdout")?;
    Ok(())
}
