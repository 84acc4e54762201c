use std::f64::consts::LN_2;

/// Smallest bit array a filter is ever sized to.
pub const MIN_BIT_COUNT: u64 = 1;
/// Smallest number of hash functions a filter is ever sized to.
pub const MIN_HASH_COUNT: u32 = 1;

/// m = -(n * ln(p) / (ln2)^2) where p is the desired false positive probability.
///
/// `p == 0` is replaced by the smallest positive `f64`, which gives a large
/// but finite `m`. The result is never below [`MIN_BIT_COUNT`], so `n == 0`
/// still yields a usable filter.
pub fn optimal_bit_count(n: u64, p: f64) -> u64 {
    let p = if p == 0.0 { f64::from_bits(1) } else { p };
    let m = (-(n as f64) * p.ln() / LN_2.powi(2)).ceil();
    // float to int casts saturate, NaN and negatives become 0
    (m as u64).max(MIN_BIT_COUNT)
}

/// k = m/n * ln2, rounded to the nearest integer.
///
/// The ratio is taken in floating point; integer division would bias `k` low.
pub fn optimal_hash_count(n: u64, m: u64) -> u32 {
    let n = n.max(1) as f64;
    let k = (m as f64 / n * LN_2).round();
    (k as u32).max(MIN_HASH_COUNT)
}
