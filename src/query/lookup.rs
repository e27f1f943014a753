use serde::Serialize;

use crate::{domain::Corpus, query::VerseSelection};

/// A verse returned from a chapter lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChapterVerse<'a> {
    /// Verse number.
    pub verse: u32,
    /// Verse text.
    pub text: &'a str,
}

impl Corpus {
    /// Returns the verses of one chapter in ascending verse order.
    ///
    /// A chapter the book doesn't have yields an empty list rather than an
    /// error, so callers can tell "no data" apart from a bad request.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::BookNotFound`] if no book has the given name.
    pub fn lookup_chapter(
        &self,
        book: &str,
        chapter: u32,
    ) -> Result<Vec<ChapterVerse<'_>>, QueryError> {
        let book = self
            .find_book(book)
            .ok_or_else(|| QueryError::BookNotFound(book.to_string()))?;

        Ok(book
            .chapter(chapter)
            .into_iter()
            .flatten()
            .map(|(&verse, text)| ChapterVerse {
                verse,
                text: text.as_str(),
            })
            .collect())
    }
}

/// Renders verses as `<verse> <text>` lines joined by newlines.
///
/// If a selection is given, only the selected verses are included; selected
/// numbers that aren't in `verses` are ignored.
#[must_use]
pub fn copy_text(verses: &[ChapterVerse<'_>], selection: Option<&VerseSelection>) -> String {
    verses
        .iter()
        .filter(|v| selection.is_none_or(|s| s.contains(v.verse)))
        .map(|v| format!("{} {}", v.verse, v.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Errors returned by corpus queries.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QueryError {
    /// The requested book is not in the corpus.
    #[error("book not found: {0}")]
    BookNotFound(String),
}
