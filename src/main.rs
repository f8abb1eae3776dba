use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use cdir_offices::document::{discover_documents, read_document};
use cdir_offices::header::{self, NameParty};
use cdir_offices::meta;
use cdir_offices::parser::{self, ProcessedDocument};
use cdir_offices::report::{self, OutputFormat, OutputRow, RunSummary};
use cdir_offices::settings::Settings;
use cdir_offices::ExtractError;

#[derive(Parser)]
#[command(name = "cdir_offices", about = "Extract legislator office addresses from CDIR biography text files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process every CDIR file in a directory and write the address report
    Run {
        /// Directory holding the CDIR-*.txt files
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Report file to write
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
        /// Max documents to process (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Show every pipeline stage for a single document
    Inspect { file: PathBuf },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            input,
            output,
            format,
            limit,
        } => {
            let mut settings = Settings::load().context("failed to load settings")?;
            if let Some(input) = input {
                settings.input_dir = input;
            }
            if let Some(output) = output {
                settings.output = output;
            }
            if let Some(format) = format {
                settings.format = format;
            }
            run(&settings, limit)
        }
        Commands::Inspect { file } => inspect(&file),
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

fn run(settings: &Settings, limit: Option<usize>) -> anyhow::Result<()> {
    info!(settings = ?settings, "starting office extraction");

    if settings.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(settings.threads)
            .build_global()
            .context("failed to configure worker pool")?;
    }

    let mut paths = discover_documents(&settings.input_dir, &settings.file_prefix, &settings.file_extension)
        .with_context(|| format!("failed to list {}", settings.input_dir.display()))?;
    if let Some(n) = limit {
        paths.truncate(n);
    }
    if paths.is_empty() {
        warn!(dir = %settings.input_dir.display(), "no CDIR files found");
    }

    println!("Processing {} documents...", paths.len());
    let (rows, summary) = process_documents(&paths, settings.chunk_size);

    report::write_report(&settings.output, &rows, settings.format)
        .with_context(|| format!("failed to write {}", settings.output.display()))?;
    summary.print();
    println!("Done! Wrote {} rows to {}", rows.len(), settings.output.display());
    Ok(())
}

fn process_documents(paths: &[PathBuf], chunk_size: usize) -> (Vec<OutputRow>, RunSummary) {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let pb = ProgressBar::new(paths.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
    {
        pb.set_style(style.progress_chars("#>-"));
    }

    let mut rows = Vec::new();
    let mut summary = RunSummary::default();

    for chunk in paths.chunks(chunk_size.max(1)) {
        let results: Vec<_> = chunk
            .par_iter()
            .map(|path| read_document(path).and_then(|doc| parser::process_document(&doc)))
            .collect();

        for (path, result) in chunk.iter().zip(results) {
            match result {
                Ok(processed) => {
                    report_diagnostics(&processed);
                    summary.record(&processed);
                    rows.extend(processed.rows);
                }
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "skipping document");
                    summary.skipped += 1;
                }
            }
        }
        pb.inc(chunk.len() as u64);
    }

    pb.finish_and_clear();
    (rows, summary)
}

fn report_diagnostics(processed: &ProcessedDocument) {
    for diagnostic in &processed.diagnostics {
        match diagnostic {
            ExtractError::MissingHeaderMarker { file } => {
                warn!(file = %file, "GPO header marker missing, using placeholder name and party");
            }
            other => warn!("{other}"),
        }
    }
}

fn inspect(path: &Path) -> anyhow::Result<()> {
    let doc = read_document(path).with_context(|| format!("failed to read {}", path.display()))?;

    println!("File: {}", doc.filename);
    match meta::parse_filename(&doc.filename) {
        Ok(m) => println!("State: {}  Chamber: {}  District: {}", m.state, m.chamber, m.district),
        Err(e) => println!("Metadata: {e}"),
    }
    let who = header::extract_name_party(&doc.text).unwrap_or_else(NameParty::placeholder);
    println!("Name: {}  Party: {}", who.name, who.party);

    let Some(trace) = parser::trace(&doc.text) else {
        println!("\n{}", report::MISSING_SECTION_ERROR);
        return Ok(());
    };

    println!("\n--- Office block ---\n{}", trace.block.trim());
    println!("\n--- Flattened ---\n{}", trace.flattened);
    print_list("Segments", &trace.segments);
    print_list("Repaired", &trace.repaired);

    println!("\n--- Addresses ---");
    for (i, (addr, flags)) in trace.addresses.iter().enumerate() {
        if flags.is_empty() {
            println!("{:>3}. {}", i + 1, addr);
        } else {
            let why = flags.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ");
            println!("{:>3}. {}  [suspicious: {}]", i + 1, addr, why);
        }
    }
    Ok(())
}

fn print_list(title: &str, items: &[String]) {
    println!("\n--- {} ({}) ---", title, items.len());
    for item in items {
        println!("  {}", item);
    }
}
