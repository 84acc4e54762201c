/// Approximate membership over words.
///
/// `contains` never returns `false` for a word that was inserted.
pub trait Filter {
    /// Sets the bits for `value`. Returns `false` if any of them could not be set.
    fn insert(&mut self, value: &str) -> bool;
    fn contains(&self, value: &str) -> bool;
    /// number of bits in the filter (m)
    fn bit_count(&self) -> u64;
    /// number of hash functions (k)
    fn hash_count(&self) -> u32;
}
