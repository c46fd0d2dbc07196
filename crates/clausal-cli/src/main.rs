//! Clausal CLI - contract risk analysis from the command line.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use clausal_core::{
    analyze_bytes, AuditRecord, AuditSink, FileAuditSink, MediaType, SummaryExport,
};

mod report;

/// Analyze contracts, score clause risk, and keep an audit trail.
#[derive(Parser)]
#[command(name = "clausal", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the append-only audit log
    #[arg(long, value_name = "FILE", default_value = "audit_log.json")]
    audit_log: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a contract document (txt, pdf or docx)
    Analyze {
        /// The contract file to analyze
        file: PathBuf,

        /// Emit the full report as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Write a summary export artifact to this path
        #[arg(long, value_name = "FILE")]
        export: Option<PathBuf>,

        /// Suppress per-clause detail; print the overview and score only
        #[arg(long)]
        quiet: bool,

        /// Skip writing the audit record
        #[arg(long)]
        no_audit: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            file,
            json,
            export,
            quiet,
            no_audit,
        } => run_analyze(&file, &cli.audit_log, json, export.as_deref(), quiet, no_audit),
    }
}

fn run_analyze(
    file: &std::path::Path,
    audit_log: &std::path::Path,
    json: bool,
    export: Option<&std::path::Path>,
    quiet: bool,
    no_audit: bool,
) -> anyhow::Result<()> {
    let media_type = MediaType::from_path(file)?;
    let bytes =
        std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;

    let analysis = analyze_bytes(&bytes, media_type)
        .with_context(|| format!("Failed to analyze {}", file.display()))?;

    if !no_audit {
        let mut sink = FileAuditSink::new(audit_log);
        sink.append(&AuditRecord::from_analysis(&analysis))
            .with_context(|| format!("Failed to append to {}", audit_log.display()))?;
        tracing::debug!(audit_log = %audit_log.display(), "audit record appended");
    }

    if let Some(path) = export {
        let summary = SummaryExport::from_analysis(&analysis);
        std::fs::write(path, summary.to_json_pretty()?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", report::render(&analysis, quiet));
    }

    Ok(())
}
