use tracing::{debug, info, warn};

use crate::bit_array::BitArray;
use crate::bloom_filters::Filter;
use crate::error::Error;
use crate::hash::HashFamily;
use crate::sizing::{optimal_bit_count, optimal_hash_count, MIN_HASH_COUNT};

#[derive(Debug, Clone)]
pub struct ClassicalBloomFilter {
    hashes: HashFamily,
    storage: BitArray,
}

impl ClassicalBloomFilter {
    /// Builds a filter sized for `words` at false positive probability `fpp`
    /// and inserts every word.
    pub fn create<S: AsRef<str>>(words: &[S], fpp: f64) -> Result<Self, Error> {
        let n = words.len() as u64;
        let m = optimal_bit_count(n, fpp);
        let k = optimal_hash_count(n, m);
        Self::with_size(m, k, words)
    }

    /// Builds a filter of exactly `bits` bits and `hashes` hash functions
    /// and inserts every word.
    pub fn with_size<S: AsRef<str>>(
        bits: u64,
        hashes: u32,
        words: &[S],
    ) -> Result<Self, Error> {
        if hashes < MIN_HASH_COUNT {
            return Err(Error::InvalidHashCount { hashes });
        }
        let storage = BitArray::new(bits).map_err(|source| Error::Construction { bits, source })?;
        let mut bf = Self { hashes: HashFamily::new(bits, hashes), storage };

        let failed = words.iter().filter(|word| !bf.insert(word.as_ref())).count();
        if failed > 0 {
            warn!(failed, "some words were only partially inserted");
        }
        info!(words = words.len(), bits, hashes, "created bloom filter");
        Ok(bf)
    }

    /// Number of bits currently set.
    pub fn bits_set(&self) -> u64 {
        self.storage.count_ones()
    }

    /// False positive probability implied by the current fill, `(set / m)^k`.
    pub fn estimated_fpp(&self) -> f64 {
        let fill = self.bits_set() as f64 / self.storage.len() as f64;
        fill.powf(f64::from(self.hashes.hash_count()))
    }

    // Sets every index it is given, even after a failure, and keeps the bits
    // already set for this value.
    fn set_bits(storage: &mut BitArray, value: &str, indices: impl Iterator<Item = u64>) -> bool {
        let mut complete = true;
        for idx in indices {
            if let Err(err) = storage.set(idx) {
                warn!(%err, value, "could not set bit for word");
                complete = false;
            }
        }
        complete
    }
}

impl Filter for ClassicalBloomFilter {
    fn insert(&mut self, value: &str) -> bool {
        let inserted = Self::set_bits(&mut self.storage, value, self.hashes.indices(value));
        debug!(value, inserted, "inserted word");
        inserted
    }

    fn contains(&self, value: &str) -> bool {
        self.hashes.indices(value).all(|idx| self.storage.get(idx))
    }

    fn bit_count(&self) -> u64 {
        self.storage.len()
    }

    fn hash_count(&self) -> u32 {
        self.hashes.hash_count()
    }
}
