//! Seeded hash family used to place words in a bit array.

use xxhash_rust::xxh3::xxh3_128_with_seed;

// Clears the top bit of a digest before range reduction.
const DIGEST_MASK: u128 = i128::MAX as u128;

/// `k` seeded 128 bit hashes of a word, each reduced into `[0, m)`.
///
/// Seeds are fixed when the family is built, so a word always maps to the
/// same positions for the same `(m, k)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashFamily {
    // number of bits the indices are reduced into
    m: u64,
    // seeds are 0..k
    k: u32,
}

impl HashFamily {
    /// # Panics
    ///
    /// Panics if `m` or `k` is zero. An empty family would report every
    /// word as present.
    pub fn new(m: u64, k: u32) -> Self {
        assert!(m > 0, "hash family needs a non-empty range");
        assert!(k > 0, "hash family needs at least one hash function");
        Self { m, k }
    }

    pub fn bit_count(&self) -> u64 {
        self.m
    }

    pub fn hash_count(&self) -> u32 {
        self.k
    }

    /// Bit positions for `value`, one per seed, in seed order.
    pub fn indices<'a>(&'a self, value: &'a str) -> impl Iterator<Item = u64> + 'a {
        let m = u128::from(self.m);
        (0..u64::from(self.k)).map(move |seed| {
            let digest = xxh3_128_with_seed(value.as_bytes(), seed);
            ((digest & DIGEST_MASK) % m) as u64
        })
    }
}
