//! Filename parsing for scripture source files
//!
//! Each source file describes one book. Its name encodes the testament, the
//! display order within that testament, and the book's name:
//!
//! `<testament digit>-<order digits><book name>.<extension>`
//!
//! - Example: `1-01창세기.txt` → old testament, order 1, `창세기`
//! - Example: `2-27요한계시록.txt` → new testament, order 27, `요한계시록`
//!
//! Names that don't follow this pattern are not source files and are skipped
//! by the corpus builder.

use std::{path::Path, sync::LazyLock};

use regex::Regex;

use crate::domain::Testament;

static SOURCE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9])-([0-9]+)(.+)$").expect("valid source name pattern"));

/// The parts of a source filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceName {
    /// Testament bucket selected by the leading digit.
    pub testament: Testament,
    /// Display order within the testament.
    pub order: u32,
    /// The book's full name.
    pub name: String,
}

/// Parse a source filename.
///
/// Returns `None` if the file's extension isn't `extension`, or if the stem
/// doesn't match `<digit>-<digits><name>`. An order too large for a `u32` is
/// also rejected.
#[must_use]
pub fn parse_source_name(path: &Path, extension: &str) -> Option<SourceName> {
    let file_name = path.file_name()?.to_str()?;
    let stem = file_name.strip_suffix(extension)?.strip_suffix('.')?;

    let captures = SOURCE_NAME.captures(stem)?;
    let testament = Testament::from_digit(captures[1].chars().next()?);
    let order = captures[2].parse().ok()?;
    let name = captures[3].to_string();

    Some(SourceName {
        testament,
        order,
        name,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use test_case::test_case;

    use super::*;

    #[test]
    fn old_testament_book() {
        let parsed = parse_source_name(Path::new("1-01창세기.txt"), "txt").unwrap();

        assert_eq!(parsed.testament, Testament::Old);
        assert_eq!(parsed.order, 1);
        assert_eq!(parsed.name, "창세기");
    }

    #[test]
    fn new_testament_book() {
        let parsed = parse_source_name(Path::new("2-27요한계시록.txt"), "txt").unwrap();

        assert_eq!(parsed.testament, Testament::New);
        assert_eq!(parsed.order, 27);
        assert_eq!(parsed.name, "요한계시록");
    }

    #[test]
    fn ignores_parent_directories() {
        let path = PathBuf::from("/data/bible").join("1-05Deut.txt");
        let parsed = parse_source_name(&path, "txt").unwrap();

        assert_eq!(parsed.name, "Deut");
        assert_eq!(parsed.order, 5);
    }

    #[test]
    fn greedy_order_digits() {
        // Digits directly after the dash belong to the order, not the name.
        let parsed = parse_source_name(Path::new("1-0091Kings.txt"), "txt").unwrap();

        assert_eq!(parsed.order, 91);
        assert_eq!(parsed.name, "Kings");
    }

    #[test]
    fn custom_extension() {
        assert!(parse_source_name(Path::new("1-01Gen.bib"), "bib").is_some());
        assert!(parse_source_name(Path::new("1-01Gen.txt"), "bib").is_none());
    }

    #[test_case("README.txt"; "no prefix")]
    #[test_case("1-Gen.txt"; "missing order")]
    #[test_case("12-01Gen.txt"; "two testament digits")]
    #[test_case("1-01Gen.md"; "wrong extension")]
    #[test_case("1-01Gentxt"; "missing dot")]
    #[test_case("1-99999999999Gen.txt"; "order overflow")]
    fn unrecognised_names(name: &str) {
        assert_eq!(parse_source_name(Path::new(name), "txt"), None);
    }
}
