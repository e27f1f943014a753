use std::{fmt, ops::RangeInclusive, str::FromStr};

/// A set of verse numbers chosen within a chapter.
///
/// Parsed from a comma-separated list of verse numbers and inclusive ranges,
/// for example `1-3,5` selects verses 1, 2, 3 and 5. Numbers that don't exist
/// in the chapter are ignored when the selection is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseSelection {
    ranges: Vec<RangeInclusive<u32>>,
}

impl VerseSelection {
    /// Returns `true` if `verse` is selected.
    #[must_use]
    pub fn contains(&self, verse: u32) -> bool {
        self.ranges.iter().any(|range| range.contains(&verse))
    }
}

impl FromStr for VerseSelection {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ranges = s
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(parse_item)
            .collect::<Result<Vec<_>, _>>()?;

        if ranges.is_empty() {
            return Err(SelectionError::Empty);
        }

        Ok(Self { ranges })
    }
}

impl fmt::Display for VerseSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            if range.start() == range.end() {
                write!(f, "{}", range.start())?;
            } else {
                write!(f, "{}-{}", range.start(), range.end())?;
            }
        }
        Ok(())
    }
}

fn parse_item(item: &str) -> Result<RangeInclusive<u32>, SelectionError> {
    if let Some((start, end)) = item.split_once('-') {
        let start = parse_verse(start)?;
        let end = parse_verse(end)?;
        if start > end {
            return Err(SelectionError::DescendingRange { start, end });
        }
        Ok(start..=end)
    } else {
        let verse = parse_verse(item)?;
        Ok(verse..=verse)
    }
}

fn parse_verse(s: &str) -> Result<u32, SelectionError> {
    let s = s.trim();
    match s.parse::<u32>() {
        Ok(0) => Err(SelectionError::ZeroVerse),
        Ok(verse) => Ok(verse),
        Err(_) => Err(SelectionError::InvalidVerse(s.to_string())),
    }
}

/// Errors parsing a [`VerseSelection`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectionError {
    /// No verses were given.
    #[error("verse selection is empty")]
    Empty,

    /// An item is not a verse number.
    #[error("invalid verse number '{0}'")]
    InvalidVerse(String),

    /// Verse numbers start at 1.
    #[error("verse numbers start at 1")]
    ZeroVerse,

    /// A range whose start is after its end.
    #[error("range {start}-{end} is descending")]
    DescendingRange {
        /// First number of the range.
        start: u32,
        /// Last number of the range.
        end: u32,
    },
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn selected(selection: &str, verses: RangeInclusive<u32>) -> Vec<u32> {
        let selection: VerseSelection = selection.parse().unwrap();
        verses.filter(|&v| selection.contains(v)).collect()
    }

    #[test]
    fn range_and_single() {
        assert_eq!(selected("1-3,5", 1..=5), vec![1, 2, 3, 5]);
    }

    #[test_case("2", &[2]; "single verse")]
    #[test_case("1,3,5", &[1, 3, 5]; "comma list")]
    #[test_case(" 2 - 3 , 5 ", &[2, 3, 5]; "whitespace")]
    #[test_case("4-4", &[4]; "single verse range")]
    #[test_case("1,,2,", &[1, 2]; "empty items")]
    #[test_case("3-2000", &[3, 4, 5]; "range past end of chapter")]
    #[test_case("99", &[]; "verse past end of chapter")]
    fn selection_over_five_verses(selection: &str, expected: &[u32]) {
        assert_eq!(selected(selection, 1..=5), expected);
    }

    #[test_case("", SelectionError::Empty; "empty")]
    #[test_case(" , ", SelectionError::Empty; "only separators")]
    #[test_case("a", SelectionError::InvalidVerse("a".to_string()); "letters")]
    #[test_case("1-", SelectionError::InvalidVerse(String::new()); "open range")]
    #[test_case("1-2-3", SelectionError::InvalidVerse("2-3".to_string()); "double range")]
    #[test_case("0-3", SelectionError::ZeroVerse; "zero")]
    #[test_case("5-3", SelectionError::DescendingRange { start: 5, end: 3 }; "descending")]
    fn invalid_selections(selection: &str, expected: SelectionError) {
        assert_eq!(selection.parse::<VerseSelection>().unwrap_err(), expected);
    }

    #[test]
    fn displays_canonical_form() {
        let selection: VerseSelection = " 1 - 3, 5 ".parse().unwrap();
        assert_eq!(selection.to_string(), "1-3,5");
    }
}
