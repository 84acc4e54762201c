use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{info, warn};

use crate::error::Error;

/// Sample word list shipped with the crate, resolved at build time so it is
/// found from any working directory.
pub const BUNDLED_WORDS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt");

/// Reads one word per line from a UTF-8 text file.
pub fn read_words(path: impl AsRef<Path>) -> Result<Vec<String>, Error> {
    let path = path.as_ref();
    let read_err = |source| Error::ReadWords { path: path.to_path_buf(), source };

    let reader = BufReader::new(File::open(path).map_err(read_err)?);
    reader.lines().collect::<Result<Vec<_>, _>>().map_err(read_err)
}

/// Like [`read_words`], but a missing or unreadable file is logged and
/// yields an empty list.
pub fn load_words(path: impl AsRef<Path>) -> Vec<String> {
    let words = read_words(path).unwrap_or_else(|err| {
        warn!(%err, "continuing with an empty word list");
        Vec::new()
    });
    info!(count = words.len(), "words added to the set");
    words
}
