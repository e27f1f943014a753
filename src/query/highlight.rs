use serde::Serialize;

use crate::query::IndexedVerse;

/// A piece of verse text, marked as matching the search query or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Segment<'a> {
    /// Text outside any match.
    Plain(&'a str),
    /// An occurrence of the query.
    Match(&'a str),
}

impl<'a> Segment<'a> {
    /// The text of this segment.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        match *self {
            Self::Plain(text) | Self::Match(text) => text,
        }
    }
}

/// Splits `text` into plain and matching segments.
///
/// Every non-overlapping occurrence of `query` is marked, scanning from the
/// left. Concatenating the segments reproduces `text`. An empty query marks
/// nothing.
#[must_use]
pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<Segment<'a>> {
    if query.is_empty() {
        return if text.is_empty() {
            Vec::new()
        } else {
            vec![Segment::Plain(text)]
        };
    }

    let mut segments = Vec::new();
    let mut last = 0;
    for (start, matched) in text.match_indices(query) {
        if start > last {
            segments.push(Segment::Plain(&text[last..start]));
        }
        segments.push(Segment::Match(matched));
        last = start + matched.len();
    }
    if last < text.len() {
        segments.push(Segment::Plain(&text[last..]));
    }
    segments
}

impl<'a> IndexedVerse<'a> {
    /// Highlights occurrences of `query` in this verse's text.
    #[must_use]
    pub fn highlight(&self, query: &str) -> Vec<Segment<'a>> {
        highlight(self.text, query)
    }
}
