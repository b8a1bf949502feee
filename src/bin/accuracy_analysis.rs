//! Measure observed spelling-checker accuracy against an exact word set.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use spellbloom::{measure_accuracy, BloomFilter, SpellingChecker};

#[derive(Parser)]
#[command(author, version, about = "Bloom filter spelling checker accuracy analysis")]
struct Cli {
    /// Path to a line-oriented word list
    #[arg(long, default_value = "/usr/share/dict/words")]
    dictionary: PathBuf,

    /// Number of random probe words to query
    #[arg(long, default_value_t = 10_000)]
    queries: usize,

    /// Expected dictionary size the filter is tuned for
    #[arg(long, default_value_t = 260_000)]
    expected_words: usize,

    /// Target false-positive probability
    #[arg(long, default_value_t = 0.01)]
    fp_probability: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let filter: BloomFilter = BloomFilter::new(cli.expected_words, cli.fp_probability)?;
    let checker = SpellingChecker::with_filter(&cli.dictionary, filter)?;

    println!("{}", checker.filter().stats());
    println!();

    let mut rng = rand::thread_rng();
    let report = measure_accuracy(&checker, &cli.dictionary, cli.queries, &mut rng)?;
    println!("{}", report);

    Ok(())
}
