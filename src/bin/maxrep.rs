use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use maxrep::{fasta, report, RepeatFinder, SearchParams, DEFAULT_MIN_LEN};
use std::path::PathBuf;

/// Detect maximal repeats in the first sequence of a FASTA file.
#[derive(Parser, Debug)]
#[command(name = "maxrep")]
#[command(version)]
#[command(long_about = "
Detect maximal repeats in a DNA sequence.

A maximal repeat is a word that occurs at least twice and whose
occurrences cannot all be extended by the same symbol on either side.
Each report line lists the word, its length, and every occurrence with
its flanking symbols:

  GATC 4 0 (,G), 4 (C,)

Examples:
  maxrep genome.fa
  maxrep genome.fa 12 40 --no-overlap
  maxrep genome.fa 8 -o repeats.txt -v
")]
struct Cli {
    /// FASTA/FASTQ file holding the sequence (only the first record is used)
    fasta_file: PathBuf,

    /// Minimum repeat length
    #[arg(default_value_t = DEFAULT_MIN_LEN)]
    min_len: usize,

    /// Maximum repeat length (defaults to the sequence length)
    max_len: Option<usize>,

    /// Exclude repeats whose occurrences overlap each other
    #[arg(short = 'c', long)]
    no_overlap: bool,

    /// Output file (defaults to the first free maxrep<N>.txt in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Search repeat lengths in parallel
    #[arg(short = 'j', long)]
    parallel: bool,

    /// Verbose output (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

/// Reads the sequence, searches it and writes the report; returns the report path.
fn run(cli: &Cli) -> Result<PathBuf> {
    let params = SearchParams::new(cli.min_len, cli.max_len)?
        .no_overlap(cli.no_overlap)
        .parallel(cli.parallel);

    let (id, sequence) = fasta::read_first_record(&cli.fasta_file)
        .with_context(|| format!("Failed to read {}", cli.fasta_file.display()))?;
    info!("sequence {}: {} symbols", id, sequence.len());

    let symbols: Vec<char> = sequence.iter().map(|&b| b as char).collect();
    let repeats = RepeatFinder::with_params(&symbols, params)
        .search()
        .with_context(|| format!("Cannot search sequence {}", id))?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| report::next_output_path(".", "maxrep"));
    report::save_report(&output, &repeats)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(output)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let output = run(&cli)?;
    if !cli.quiet {
        println!("Results written to {}", output.display());
    }
    Ok(())
}
