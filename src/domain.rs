//! Domain models for the scripture corpus.
//!
//! This module contains the core domain types: testaments, books with their
//! chapter/verse structure, the assembled corpus, and configuration.

/// Testament partitions of the corpus.
pub mod testament;
pub use testament::Testament;

/// Books and their chapter/verse maps.
pub mod book;
pub use book::{Book, Chapter, Chapters};

mod corpus;
pub use corpus::Corpus;

mod config;
pub use config::Config;
