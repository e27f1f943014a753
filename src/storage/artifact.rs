//! The serialized corpus is a single pretty-printed JSON document with one
//! array of books per testament. Chapter and verse numbers become string keys.

use std::{fs, io, path::Path};

use crate::domain::Corpus;

/// Serializes a corpus to pretty-printed JSON with two-space indentation.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(corpus: &Corpus) -> serde_json::Result<String> {
    serde_json::to_string_pretty(corpus)
}

/// Writes a corpus to `path`, creating parent directories as needed.
///
/// The document is fully serialized before the file is touched, so a
/// serialization failure leaves no output behind.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn save(corpus: &Corpus, path: &Path) -> Result<(), SaveError> {
    let json = to_json(corpus)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, json)?;
    Ok(())
}

/// Reads a corpus from `path`.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] if there is no file at `path`, or another
/// variant if it cannot be read or parsed.
pub fn load(path: &Path) -> Result<Corpus, LoadError> {
    let content = fs::read_to_string(path).map_err(|io_error| match io_error.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound,
        _ => LoadError::Io(io_error),
    })?;

    let corpus = serde_json::from_str(&content)?;
    Ok(corpus)
}

/// Errors when writing the corpus.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The corpus could not be serialized.
    #[error("failed to serialize corpus: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The file or its parent directories could not be written.
    #[error("failed to write corpus: {0}")]
    Io(#[from] io::Error),
}

/// Errors when reading the corpus.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// There is no corpus at the given path.
    #[error("corpus file not found")]
    NotFound,

    /// The file could not be read.
    #[error("failed to read corpus: {0}")]
    Io(#[from] io::Error),

    /// The file is not a valid corpus.
    #[error("failed to parse corpus: {0}")]
    Parse(#[from] serde_json::Error),
}
