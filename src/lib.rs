//! Bloom filter over a fixed word list.
//!
//! A filter is sized from the number of words and a target false positive
//! probability, filled once, and then queried. Inserted words are always
//! reported as present; other words are reported as present with roughly the
//! configured probability.
//!
//! ```
//! use word_bloom::{ClassicalBloomFilter, Filter};
//!
//! let bf = ClassicalBloomFilter::create(&["apple", "banana"], 0.01).unwrap();
//! assert!(bf.contains("apple"));
//! ```

pub mod bit_array;
pub mod bloom_filters;
pub mod error;
pub mod hash;
pub mod sizing;
pub mod tester;
pub mod words;

pub use self::bit_array::BitArray;
pub use self::bloom_filters::{ClassicalBloomFilter, Filter};
pub use self::error::{BitArrayError, Error};
pub use self::hash::HashFamily;
pub use self::sizing::{optimal_bit_count, optimal_hash_count};
pub use self::tester::{estimate_false_positive_rate, FalsePositiveReport, WordGenerator};
pub use self::words::{load_words, read_words};
