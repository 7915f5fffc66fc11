//! mdredact CLI
//!
//! Produces redacted copies of markdown documents and reconstructs full
//! documents from a source and an edited redacted copy.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use mdredact_core::Transformer;

/// mdredact - markdown redaction and restoration
#[derive(Parser)]
#[command(name = "mdredact")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Produce a redacted copy of a markdown document
    Redact {
        /// Source markdown file, or `-` for stdin
        source: PathBuf,
    },
    /// Reconstruct a document from a source and an edited redacted copy
    Restore {
        /// Source markdown file, or `-` for stdin
        source: PathBuf,
        /// Redacted markdown file
        redacted: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let transformer = Transformer::new();
    let output = match &cli.command {
        Commands::Redact { source } => {
            let source = read_input(source)?;
            transformer.source_to_redacted(&source).into_diagnostic()?
        }
        Commands::Restore { source, redacted } => {
            let source = read_input(source)?;
            let redacted = read_input(redacted)?;
            transformer
                .source_and_redacted_to_markdown(&source, &redacted)
                .into_diagnostic()?
        }
    };
    print!("{output}");
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .into_diagnostic()?;
        debug!(bytes = buffer.len(), "read stdin");
        Ok(buffer)
    } else {
        debug!(path = %path.display(), "reading file");
        fs::read_to_string(path).into_diagnostic()
    }
}
