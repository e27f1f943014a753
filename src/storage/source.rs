//! Each non-blank line of a source file holds one verse:
//!
//! `<abbr><chapter>:<verse> [<subtitle>] <text>`
//!
//! For example `창1:1 <태초> 하나님이 천지를 창조하시니라`. The bracketed
//! subtitle is optional and discarded. Lines that don't follow this format are
//! skipped, which tolerates headers and stray formatting in the source files.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::Chapters;

static SOURCE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^0-9]+)([0-9]+):([0-9]+)\s+(?:<[^>]+>\s*)?(.+)$")
        .expect("valid source line pattern")
});

/// A single verse parsed from a source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// The book abbreviation preceding the chapter number.
    pub abbr: &'a str,
    /// Chapter number, at least 1.
    pub chapter: u32,
    /// Verse number, at least 1.
    pub verse: u32,
    /// The verse text, trimmed, without the subtitle.
    pub text: &'a str,
}

/// Parse one line of a source file.
///
/// Returns `None` for blank lines, lines that don't match the verse format,
/// and lines whose chapter or verse number is zero or out of range.
#[must_use]
pub fn parse_line(line: &str) -> Option<SourceLine<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let captures = SOURCE_LINE.captures(line)?;
    let chapter = parse_number(captures.get(2)?.as_str())?;
    let verse = parse_number(captures.get(3)?.as_str())?;

    Some(SourceLine {
        abbr: captures.get(1)?.as_str().trim(),
        chapter,
        verse,
        text: captures.get(4)?.as_str().trim(),
    })
}

fn parse_number(digits: &str) -> Option<u32> {
    digits.parse().ok().filter(|&n| n >= 1)
}

/// The verses of one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSource {
    /// The abbreviation from the last verse line.
    pub abbr: String,
    /// Every verse, keyed by chapter then verse number.
    pub chapters: Chapters,
}

impl ParsedSource {
    /// Parse the contents of a source file.
    ///
    /// A leading byte-order mark is ignored. A verse that appears more than
    /// once keeps its last text, and the abbreviation is taken from the last
    /// verse line. Both situations are logged as warnings.
    ///
    /// # Errors
    ///
    /// In `strict` mode a repeated verse or a change of abbreviation is an
    /// error instead.
    pub fn parse(content: &str, strict: bool) -> Result<Self, SourceError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut parsed = Self::default();
        let mut seen_abbr = false;

        for (idx, raw) in content.lines().enumerate() {
            let line_number = idx + 1;
            let Some(line) = parse_line(raw) else {
                if !raw.trim().is_empty() {
                    tracing::debug!("Skipping unrecognised line {line_number}: {raw:?}");
                }
                continue;
            };

            if seen_abbr && parsed.abbr != line.abbr {
                if strict {
                    return Err(SourceError::AbbreviationChanged {
                        line: line_number,
                        previous: parsed.abbr,
                        found: line.abbr.to_string(),
                    });
                }
                tracing::warn!(
                    "Abbreviation changed from '{}' to '{}' on line {line_number}",
                    parsed.abbr,
                    line.abbr
                );
            }
            line.abbr.clone_into(&mut parsed.abbr);
            seen_abbr = true;

            let previous = parsed
                .chapters
                .entry(line.chapter)
                .or_default()
                .insert(line.verse, line.text.to_string());

            if previous.is_some() {
                if strict {
                    return Err(SourceError::DuplicateVerse {
                        line: line_number,
                        chapter: line.chapter,
                        verse: line.verse,
                    });
                }
                tracing::warn!(
                    "Verse {}:{} on line {line_number} overwrites an earlier occurrence",
                    line.chapter,
                    line.verse
                );
            }
        }

        Ok(parsed)
    }

    /// Number of verses parsed.
    #[must_use]
    pub fn verse_count(&self) -> usize {
        self.chapters.values().map(std::collections::BTreeMap::len).sum()
    }
}

/// Inconsistent data in a source file, reported in strict mode.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SourceError {
    /// The same chapter and verse appear twice.
    #[error("line {line}: duplicate verse {chapter}:{verse}")]
    DuplicateVerse {
        /// The line of the second occurrence.
        line: usize,
        /// Chapter number.
        chapter: u32,
        /// Verse number.
        verse: u32,
    },

    /// A line uses a different abbreviation to the lines before it.
    #[error("line {line}: abbreviation '{found}' differs from '{previous}'")]
    AbbreviationChanged {
        /// The line with the new abbreviation.
        line: usize,
        /// The abbreviation used so far.
        previous: String,
        /// The abbreviation found on this line.
        found: String,
    },
}
