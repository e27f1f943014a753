//! Plain-text scripture corpus
//!
//! Scripture books are plain-text files stored in a directory. They are
//! converted once into a structured JSON corpus, which is then loaded
//! read-only for chapter lookup and keyword search.

pub mod domain;
pub use domain::{Book, Config, Corpus, Testament};

/// Source file parsing, corpus building and artifact serialization.
pub mod storage;
pub use storage::{BuildReport, Directory};

/// Read-only queries over a loaded corpus.
pub mod query;
pub use query::{QueryError, SearchPage, Segment, VerseIndex, VerseSelection};
