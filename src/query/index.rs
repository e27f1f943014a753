use std::fmt;

use serde::Serialize;

use crate::domain::{Corpus, Testament};

/// One verse of the corpus, flattened for linear search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexedVerse<'a> {
    /// The testament the book belongs to.
    pub testament: Testament,
    /// The book's full name.
    pub book: &'a str,
    /// Chapter number.
    pub chapter: u32,
    /// Verse number.
    pub verse: u32,
    /// Verse text.
    pub text: &'a str,
}

impl IndexedVerse<'_> {
    /// A `<book> <chapter>:<verse>` reference for display.
    #[must_use]
    pub const fn reference(&self) -> Reference<'_> {
        Reference(self)
    }
}

/// Displays an [`IndexedVerse`] as `<book> <chapter>:<verse>`.
///
/// Returned by [`IndexedVerse::reference`].
#[derive(Debug, Clone, Copy)]
pub struct Reference<'a>(&'a IndexedVerse<'a>);

impl fmt::Display for Reference<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.0.book, self.0.chapter, self.0.verse)
    }
}

/// Every verse of a corpus in reading order.
///
/// Entries run old testament then new testament, books by order, chapters and
/// verses in ascending numeric order. The index borrows its text from the
/// corpus and is rebuilt whenever a corpus is loaded.
#[derive(Debug, Clone, Default)]
pub struct VerseIndex<'a> {
    entries: Vec<IndexedVerse<'a>>,
}

impl<'a> VerseIndex<'a> {
    /// Flattens a corpus into an index.
    #[must_use]
    pub fn new(corpus: &'a Corpus) -> Self {
        let mut entries = Vec::with_capacity(corpus.verse_count());

        for (testament, book) in corpus.books() {
            for (&chapter, verses) in book.chapters() {
                for (&verse, text) in verses {
                    entries.push(IndexedVerse {
                        testament,
                        book: book.name(),
                        chapter,
                        verse,
                        text: text.as_str(),
                    });
                }
            }
        }

        Self { entries }
    }

    /// All entries in reading order.
    #[must_use]
    pub fn entries(&self) -> &[IndexedVerse<'a>] {
        &self.entries
    }

    /// Number of verses in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the index has no verses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Corpus {
    /// Builds a [`VerseIndex`] over this corpus.
    #[must_use]
    pub fn index(&self) -> VerseIndex<'_> {
        VerseIndex::new(self)
    }
}
