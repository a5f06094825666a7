//! Candidate input - reads passwords to check, one per line.

use std::io::BufRead;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Candidate file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read candidates: {0}")]
    Read(#[from] std::io::Error),
}

/// Reads candidates from `reader`, one per line.
///
/// Lines are split on `\n` and a trailing `\r` is dropped. Nothing else is
/// trimmed, since spaces are valid password characters. Lines are kept as
/// raw bytes so input that is not UTF-8 is still checked.
pub fn read_candidates<R: BufRead>(reader: R) -> Result<Vec<Vec<u8>>, InputError> {
    let mut candidates = Vec::new();
    for line in reader.split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        candidates.push(line);
    }
    Ok(candidates)
}

/// Reads candidates from a file, one per line.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
pub fn read_candidates_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<u8>>, InputError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Candidate file not found: {}", path.display());
        return Err(InputError::FileNotFound(path.to_path_buf()));
    }

    let file = std::fs::File::open(path)?;
    let candidates = read_candidates(std::io::BufReader::new(file))?;

    #[cfg(feature = "tracing")]
    tracing::debug!("Read {} candidates from {:?}", candidates.len(), path);

    Ok(candidates)
}
