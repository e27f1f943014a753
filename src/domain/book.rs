use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Verse number → verse text.
///
/// Keys are integers in memory and strings in the serialized corpus; the
/// conversion happens at the serialization boundary. A `BTreeMap` keeps
/// iteration in ascending verse order.
pub type Chapter = BTreeMap<u32, String>;

/// Chapter number → [`Chapter`], in ascending chapter order.
pub type Chapters = BTreeMap<u32, Chapter>;

/// A named unit of scripture with an explicit display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    name: String,
    abbr: String,
    order: u32,
    chapters: Chapters,
}

impl Book {
    /// Creates a book from its parsed parts.
    #[must_use]
    pub const fn new(name: String, abbr: String, order: u32, chapters: Chapters) -> Self {
        Self {
            name,
            abbr,
            order,
            chapters,
        }
    }

    /// The book's full name, taken from the source filename.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The abbreviation found at the start of each source line.
    #[must_use]
    pub fn abbr(&self) -> &str {
        &self.abbr
    }

    /// Display order within the book's testament.
    #[must_use]
    pub const fn order(&self) -> u32 {
        self.order
    }

    /// All chapters of the book.
    #[must_use]
    pub const fn chapters(&self) -> &Chapters {
        &self.chapters
    }

    /// A single chapter, if the book has it.
    #[must_use]
    pub fn chapter(&self, number: u32) -> Option<&Chapter> {
        self.chapters.get(&number)
    }

    /// Chapter numbers in ascending order.
    pub fn chapter_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.chapters.keys().copied()
    }

    /// Number of verses in a chapter, or zero if the chapter is missing.
    #[must_use]
    pub fn verse_count(&self, chapter: u32) -> usize {
        self.chapter(chapter).map_or(0, BTreeMap::len)
    }

    /// Number of verses across all chapters.
    #[must_use]
    pub fn total_verses(&self) -> usize {
        self.chapters.values().map(BTreeMap::len).sum()
    }
}
