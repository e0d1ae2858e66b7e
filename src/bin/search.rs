// fuzzy-pinyin Search CLI Tool
// Filters labels from a file or stdin and prints highlighted matches

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use fuzzy_pinyin::{mark, LabelMatch, MatcherCache, MatcherConfig};
use tracing_subscriber::EnvFilter;

/// Fuzzy Search Tool - Filter labels by subsequence or pinyin query
#[derive(Parser, Debug)]
#[command(name = "fuzzy-search")]
#[command(about = "Filter labels by subsequence or pinyin initials", long_about = None)]
#[command(version)]
struct Args {
    /// Search query
    /// - Latin letters match words and pinyin (e.g., "gd", "lj")
    /// - Chinese characters match literally (e.g., "链")
    #[arg(value_name = "QUERY")]
    query: String,

    /// File with one label per line (reads stdin when omitted)
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Maximum number of results to display
    #[arg(short, long, default_value = "20")]
    limit: usize,

    /// Disable pinyin matching
    #[arg(short, long)]
    plain: bool,

    /// Print results as JSON lines
    #[arg(short, long)]
    json: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = MatcherConfig::default().with_pinyin(!args.plain);
    config.validate()?;

    let input = read_labels(args.file.as_ref())?;
    let labels: Vec<&str> = input
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect();

    tracing::debug!(labels = labels.len(), query = %args.query, "filtering");

    let mut cache = MatcherCache::new(config);
    let mut results = cache.filter(labels.iter().copied(), &args.query);
    let total = results.len();
    results.truncate(args.limit);

    if args.json {
        for result in &results {
            println!("{}", serde_json::to_string(result)?);
        }
        return Ok(());
    }

    if results.is_empty() {
        println!("No matches found.");
        return Ok(());
    }

    for result in &results {
        println!("{}", render(result));
    }
    if total > results.len() {
        println!("... {} more", total - results.len());
    }

    Ok(())
}

/// Install the log subscriber; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_labels(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Label with highlighted spans wrapped in brackets
fn render(result: &LabelMatch) -> String {
    mark(&result.label, &result.ranges, "[", "]")
}
