use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum BitArrayError {
    #[error("bit array length must be positive and addressable, got {len}")]
    InvalidSize { len: u64 },
    #[error("bit index {index} is out of range for a bit array of {len} bits")]
    IndexOutOfRange { index: u64, len: u64 },
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("could not create bloom filter of {bits} bits")]
    Construction {
        bits: u64,
        #[source]
        source: BitArrayError,
    },
    #[error("a bloom filter needs at least one hash function, got {hashes}")]
    InvalidHashCount { hashes: u32 },
    #[error("could not read word list {}", path.display())]
    ReadWords {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
