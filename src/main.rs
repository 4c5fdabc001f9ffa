//! Command-line interface for csv-export
//!
//! # Usage Examples
//!
//! ## Export
//! ```bash
//! # Export a JSON array of records into the host's download directory
//! csv-export export users.json --name "user report"
//!
//! # Explicit target directory (also honors CSV_EXPORT_DIR)
//! csv-export export users.json --name users --out-dir /tmp/exports
//! ```
//!
//! ## Preview
//! ```bash
//! # Render to stdout without touching the file system
//! cat users.json | csv-export preview - --eol lf --no-bom
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use csv_export::{download, CsvExporter, DirectorySink, FormatOpts, RecordInput, StdoutSink};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "csv-export")]
#[command(about = "A tool for exporting record data as CSV file downloads")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export records to a CSV file in the download directory
    Export {
        /// Input file holding a JSON array of flat records, or '-' for stdin
        input: String,

        /// Base file name; spaces are replaced and '.csv' is appended
        #[arg(long)]
        name: String,

        /// CSV formatting options
        #[command(flatten)]
        format: FormatOpts,

        /// Target directory (default: the host's download directory)
        #[arg(long, env = "CSV_EXPORT_DIR")]
        out_dir: Option<PathBuf>,
    },

    /// Render records and print the CSV document to stdout
    Preview {
        /// Input file holding a JSON array of flat records, or '-' for stdin
        input: String,

        /// Base file name; spaces are replaced and '.csv' is appended
        #[arg(long, default_value = "export")]
        name: String,

        /// CSV formatting options
        #[command(flatten)]
        format: FormatOpts,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            input,
            name,
            format,
            out_dir,
        } => {
            let payload = read_input(&input)?;
            debug!("read {} bytes of record payload", payload.len());
            let exporter =
                CsvExporter::new(RecordInput::Encoded(payload), &name, (&format).into())
                    .context("Failed to build CSV export")?;

            let sink = DirectorySink::detect(out_dir)?;
            download(&exporter, &sink).context("Failed to save CSV export")?;

            println!("Saved {}", sink.dir().join(exporter.file_name()).display());
        }

        Commands::Preview {
            input,
            name,
            format,
        } => {
            let payload = read_input(&input)?;
            debug!("read {} bytes of record payload", payload.len());
            let exporter =
                CsvExporter::new(RecordInput::Encoded(payload), &name, (&format).into())
                    .context("Failed to build CSV export")?;

            download(&exporter, &StdoutSink)?;
        }
    }

    Ok(())
}

/// Read the record payload from a file path or stdin (`-`).
fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf)
            .context("Failed to read records from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read records from {input}"))
    }
}
