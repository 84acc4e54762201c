mod base;
mod classical_bloom_filter;

pub use self::base::Filter;
pub use self::classical_bloom_filter::ClassicalBloomFilter;
