use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};

// Import from textharvest-core
use textharvest_core::{run_with_summary, RunOutcome, SourceEntry, DEFAULT_MAX_CHARS};

// Import CLI utilities
use textharvest::{build_config, logging, parse_entry, Overrides};

#[derive(Parser)]
#[command(name = "textharvest")]
#[command(about = "Extract labelled PDF text into a JSON array of records")]
struct Args {
    /// Manifest listing documents and their labels (YAML, or JSON for *.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Extra document as PATH=LABEL; repeatable, processed after the manifest
    #[arg(short, long = "entry", value_name = "PATH=LABEL", value_parser = parse_entry_arg)]
    entries: Vec<SourceEntry>,

    /// Directory that relative document paths are resolved against
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// Maximum characters kept per document
    #[arg(long)]
    max_chars: Option<usize>,

    /// Leave the `file` key out of every record
    #[arg(long)]
    omit_source: bool,

    /// Output file path (if not specified, JSON goes to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Write a run summary (counts, timings, run id) to this path
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Show an example manifest and exit
    #[arg(long)]
    show_configs: bool,

    /// Debug-level logging on stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn parse_entry_arg(raw: &str) -> std::result::Result<SourceEntry, String> {
    parse_entry(raw).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init(args.verbose);

    if args.show_configs {
        show_help();
        return Ok(());
    }

    let overrides = Overrides {
        base_dir: args.base_dir.clone(),
        max_chars: args.max_chars,
        omit_source: args.omit_source,
        entries: args.entries.clone(),
    };
    let config = build_config(args.config.as_deref(), overrides)?;

    if config.documents.is_empty() {
        tracing::warn!("⚠️  No documents given; pass --config or --entry PATH=LABEL");
    }

    let (outcome, summary) = run_with_summary(&config);

    write_outcome(&outcome, args.output.as_deref(), args.pretty)?;

    if let Some(summary_path) = &args.summary {
        summary.save(summary_path)?;
        tracing::info!("💾 Summary saved to: {}", summary_path.display());
    }

    if outcome.is_unavailable() {
        std::process::exit(1);
    }

    Ok(())
}

fn write_outcome(outcome: &RunOutcome, output: Option<&Path>, pretty: bool) -> Result<()> {
    match output {
        Some(path) => {
            outcome.save(path, pretty)?;
            tracing::info!("💾 Results saved to: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            outcome.write_to(&mut handle, pretty)?;
            handle.flush()?;
        }
    }
    Ok(())
}

fn show_help() {
    eprintln!("\n📋 Manifest format (YAML, or the same keys as JSON):");
    eprintln!("  base_dir: /path/to/pdfs       # optional, joins relative paths");
    eprintln!("  max_chars: {}               # optional", DEFAULT_MAX_CHARS);
    eprintln!("  include_source: true          # optional, emit the `file` key");
    eprintln!("  documents:");
    eprintln!("    - path: intro.pdf");
    eprintln!("      label: Introduction");
    eprintln!("    - path: /abs/path/ethics.pdf");
    eprintln!("      label: Ethics");

    eprintln!("\n📄 Output (stdout unless --output):");
    eprintln!("  [{{\"file\": ..., \"category\": ..., \"text\": ..., \"chars\": N}}, ...]");
    eprintln!("  Failed documents carry \"text\": \"\", \"chars\": 0 and an \"error\" message.");
    eprintln!("  Without a PDF backend the output is a single {{\"error\": ...}} object.");

    eprintln!("\n📝 Usage Examples:");
    eprintln!("  textharvest -c manifest.yaml > records.json");
    eprintln!("  textharvest -e intro.pdf=Introduction -e law.pdf=Law --base-dir ./pdfs");
    eprintln!("  textharvest -c manifest.yaml --omit-source --pretty -o out.json --summary run.json");
}
