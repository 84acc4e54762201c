//! Empirical false positive measurement with random lowercase words.

use std::collections::HashSet;
use std::fmt;

use rand::distributions::Uniform;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::bloom_filters::Filter;

pub const DEFAULT_MIN_WORD_LEN: usize = 5;
pub const DEFAULT_MAX_WORD_LEN: usize = 12;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Endless source of random lowercase words with lengths in `[min_len, max_len]`.
#[derive(Debug, Clone)]
pub struct WordGenerator<R> {
    rng: R,
    lengths: Uniform<usize>,
    letters: Uniform<usize>,
}

impl<R: Rng> WordGenerator<R> {
    /// # Panics
    ///
    /// Panics if `min_len > max_len`.
    pub fn new(rng: R, min_len: usize, max_len: usize) -> Self {
        Self {
            rng,
            lengths: Uniform::new_inclusive(min_len, max_len),
            letters: Uniform::new(0, ALPHABET.len()),
        }
    }

    pub fn generate(&mut self) -> String {
        let len = self.rng.sample(self.lengths);
        (0..len).map(|_| char::from(ALPHABET[self.rng.sample(self.letters)])).collect()
    }
}

impl WordGenerator<ChaCha8Rng> {
    /// Reproducible generator, the same seed always yields the same words.
    pub fn seeded(seed: u64, min_len: usize, max_len: usize) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed), min_len, max_len)
    }

    pub fn from_entropy(min_len: usize, max_len: usize) -> Self {
        Self::new(ChaCha8Rng::from_entropy(), min_len, max_len)
    }
}

impl<R: Rng> Iterator for WordGenerator<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.generate())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FalsePositiveReport {
    pub trials: u64,
    pub false_positives: u64,
    /// false positives per hundred trials, rounded to 4 decimal places
    pub percentage: f64,
}

impl FalsePositiveReport {
    pub fn new(trials: u64, false_positives: u64) -> Self {
        let percentage = if trials == 0 {
            0.0
        } else {
            let raw = 100.0 * false_positives as f64 / trials as f64;
            (raw * 10_000.0).round() / 10_000.0
        };
        Self { trials, false_positives, percentage }
    }

    /// Observed false positive rate as a fraction.
    pub fn rate(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.false_positives as f64 / self.trials as f64
    }
}

impl fmt::Display for FalsePositiveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} false positives (from a total of {} words).",
            self.false_positives, self.trials
        )?;
        write!(f, "Error percentage: {}%", self.percentage)
    }
}

/// Queries `filter` with `trials` generated words and counts the hits that
/// are not in `known`.
pub fn estimate_false_positive_rate<F, G>(
    filter: &F,
    trials: u64,
    known: &HashSet<String>,
    mut generate: G,
) -> FalsePositiveReport
where
    F: Filter + ?Sized,
    G: FnMut() -> String,
{
    let mut false_positives = 0;
    for _ in 0..trials {
        let candidate = generate();
        if filter.contains(&candidate) && !known.contains(&candidate) {
            false_positives += 1;
        }
    }

    let report = FalsePositiveReport::new(trials, false_positives);
    debug!(trials, false_positives, percentage = report.percentage, "measured false positives");
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    // Claims every word, so each non-member is a false positive.
    struct Everything;

    impl Filter for Everything {
        fn insert(&mut self, _value: &str) -> bool {
            true
        }

        fn contains(&self, _value: &str) -> bool {
            true
        }

        fn bit_count(&self) -> u64 {
            1
        }

        fn hash_count(&self) -> u32 {
            1
        }
    }

    #[test]
    fn every_length_in_range_is_generated() {
        let lengths: HashSet<usize> =
            WordGenerator::seeded(7, 5, 12).take(10_000).map(|w| w.len()).collect();
        assert_eq!(lengths, (5..=12).collect::<HashSet<usize>>());
    }

    #[test]
    fn words_are_lowercase_ascii() {
        let words: Vec<String> = WordGenerator::seeded(11, 1, 30).take(1_000).collect();
        assert!(words.iter().all(|w| !w.is_empty() && w.bytes().all(|b| b.is_ascii_lowercase())));

        let letters: HashSet<char> = words.iter().flat_map(|w| w.chars()).collect();
        assert_eq!(letters.len(), 26);
    }

    #[test]
    fn fixed_length() {
        assert!(WordGenerator::seeded(3, 8, 8).take(100).all(|w| w.len() == 8));
    }

    #[test]
    fn seeded_generators_repeat() {
        let first: Vec<String> = WordGenerator::seeded(42, 5, 12).take(50).collect();
        let second: Vec<String> = WordGenerator::seeded(42, 5, 12).take(50).collect();
        assert_eq!(first, second);
    }

    #[test]
    #[should_panic]
    fn inverted_range_panics() {
        WordGenerator::seeded(0, 12, 5);
    }

    #[test]
    fn report_rounds_percentage() {
        let report = FalsePositiveReport::new(3, 1);
        assert_eq!(report.percentage, 33.3333);
        assert!((report.rate() - 1.0 / 3.0).abs() < 1e-12);

        let report = FalsePositiveReport::new(100_000, 1_234);
        assert_eq!(report.percentage, 1.234);
        assert_eq!(
            report.to_string(),
            "1234 false positives (from a total of 100000 words).\nError percentage: 1.234%"
        );
    }

    #[test]
    fn report_without_trials() {
        let report = FalsePositiveReport::new(0, 0);
        assert_eq!(report.percentage, 0.0);
        assert_eq!(report.rate(), 0.0);
    }

    #[test]
    fn known_members_are_not_false_positives() {
        let known: HashSet<String> = ["apple", "pear"].iter().map(|w| w.to_string()).collect();
        let mut queries = ["apple", "plum", "pear", "fig"].iter().cycle().map(|w| w.to_string());

        let report =
            estimate_false_positive_rate(&Everything, 8, &known, || queries.next().unwrap());
        assert_eq!(report.false_positives, 4);
        assert_eq!(report.percentage, 50.0);
    }
}
