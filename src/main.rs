use std::collections::HashSet;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use word_bloom::tester::{DEFAULT_MAX_WORD_LEN, DEFAULT_MIN_WORD_LEN};
use word_bloom::words::BUNDLED_WORDS;
use word_bloom::{
    estimate_false_positive_rate, load_words, ClassicalBloomFilter, Error, Filter, WordGenerator,
};

/// Builds a bloom filter from a word list and measures its false positive rate.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Word list, one word per line
    #[arg(long, default_value = BUNDLED_WORDS)]
    words: PathBuf,

    /// Target false positive probability
    #[arg(long, default_value_t = 0.01)]
    fpp: f64,

    /// Number of random words to test against the filter
    #[arg(long, default_value_t = 100_000)]
    trials: u64,

    /// Shortest random word
    #[arg(long, default_value_t = DEFAULT_MIN_WORD_LEN)]
    min_len: usize,

    /// Longest random word
    #[arg(long, default_value_t = DEFAULT_MAX_WORD_LEN)]
    max_len: usize,

    /// Seed for the random words, OS entropy when absent
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Error> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    if cli.min_len > cli.max_len {
        clap::Error::raw(
            clap::error::ErrorKind::ValueValidation,
            format!("--min-len ({}) must not exceed --max-len ({})\n", cli.min_len, cli.max_len),
        )
        .exit();
    }

    let words = load_words(&cli.words);
    let bf = ClassicalBloomFilter::create(&words, cli.fpp)?;
    tracing::info!(
        bits = bf.bit_count(),
        hashes = bf.hash_count(),
        estimated_fpp = bf.estimated_fpp(),
        "filter ready"
    );

    let known: HashSet<String> = words.into_iter().collect();
    let mut generator = match cli.seed {
        Some(seed) => WordGenerator::seeded(seed, cli.min_len, cli.max_len),
        None => WordGenerator::from_entropy(cli.min_len, cli.max_len),
    };
    let report = estimate_false_positive_rate(&bf, cli.trials, &known, || generator.generate());
    println!("{report}");
    Ok(())
}
