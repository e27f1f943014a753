//! A directory of scripture source files
//!
//! The [`Directory`] reads every recognised source file in a directory and
//! assembles them into a [`Corpus`], which can then be written out as a single
//! JSON artifact.

use std::{
    ffi::OsStr,
    fmt, fs, io,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::{
    domain::{Book, Config, Corpus, Testament},
    storage::{
        artifact::{self, SaveError},
        path_parser::parse_source_name,
        source::{ParsedSource, SourceError},
    },
};

/// A directory whose source files have been parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    corpus: Corpus,
    report: BuildReport,
}

/// A directory that hasn't been read yet.
#[derive(Debug, PartialEq, Eq)]
pub struct Unloaded;

/// A filesystem backed set of scripture source files.
#[derive(Debug)]
pub struct Directory<S> {
    /// The directory containing the source files.
    root: PathBuf,
    config: Config,
    state: S,
}

impl<S> Directory<S> {
    /// The directory containing the source files.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The configuration in effect for this directory.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }
}

impl Directory<Unloaded> {
    /// Opens a directory, reading `bible.toml` from it if present.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        let config = Config::load_or_default(&root);
        Self::with_config(root, config)
    }

    /// Opens a directory with an explicit configuration.
    #[must_use]
    pub const fn with_config(root: PathBuf, config: Config) -> Self {
        Self {
            root,
            config,
            state: Unloaded,
        }
    }

    /// Parse every source file in the directory.
    ///
    /// Files are processed in lexical filename order. Files whose names are
    /// not `<digit>-<digits><name>.<ext>` are skipped and listed in the
    /// report. Books are ordered within each testament by the order encoded in
    /// their filename.
    ///
    /// # Errors
    ///
    /// Any failure to list the directory or read a source file aborts the
    /// whole build. In strict mode, inconsistent source data does too.
    pub fn load_all(self) -> Result<Directory<Loaded>, BuildError> {
        let paths = collect_source_paths(&self.root, self.config.extension())?;

        let mut old_testament = Vec::new();
        let mut new_testament = Vec::new();
        let mut skipped = Vec::new();
        let mut verses = 0;

        for path in paths {
            let Some(source_name) = parse_source_name(&path, self.config.extension()) else {
                tracing::debug!("Skipping file with unrecognised name: {}", path.display());
                skipped.push(path);
                continue;
            };

            let content = fs::read_to_string(&path).map_err(|source| BuildError::Io {
                path: path.clone(),
                source,
            })?;

            let parsed = ParsedSource::parse(&content, self.config.strict).map_err(|source| {
                BuildError::Source {
                    path: path.clone(),
                    source,
                }
            })?;

            tracing::debug!(
                "Parsed {} ({} verses) from {}",
                source_name.name,
                parsed.verse_count(),
                path.display()
            );
            verses += parsed.verse_count();

            let book = Book::new(
                source_name.name,
                parsed.abbr,
                source_name.order,
                parsed.chapters,
            );
            match source_name.testament {
                Testament::Old => old_testament.push(book),
                Testament::New => new_testament.push(book),
            }
        }

        let report = BuildReport {
            old_books: old_testament.len(),
            new_books: new_testament.len(),
            verses,
            skipped,
        };
        let corpus = Corpus::new(old_testament, new_testament);

        tracing::info!("{report}");

        Ok(Directory {
            root: self.root,
            config: self.config,
            state: Loaded { corpus, report },
        })
    }
}

impl Directory<Loaded> {
    /// The assembled corpus.
    #[must_use]
    pub const fn corpus(&self) -> &Corpus {
        &self.state.corpus
    }

    /// Summary of what was read.
    #[must_use]
    pub const fn report(&self) -> &BuildReport {
        &self.state.report
    }

    /// Consumes the directory, returning the corpus.
    #[must_use]
    pub fn into_corpus(self) -> Corpus {
        self.state.corpus
    }

    /// Writes the corpus to the configured output path and returns that path.
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus cannot be serialized or written.
    pub fn write(&self) -> Result<&Path, BuildError> {
        let output = self.config.output();
        self.write_to(output)?;
        Ok(output)
    }

    /// Writes the corpus to `path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus cannot be serialized or written.
    pub fn write_to(&self, path: &Path) -> Result<(), BuildError> {
        artifact::save(&self.state.corpus, path).map_err(|source| BuildError::Save {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Wrote corpus to {}", path.display());
        Ok(())
    }
}

/// Counts reported after reading a source directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Books placed in the old testament.
    pub old_books: usize,
    /// Books placed in the new testament.
    pub new_books: usize,
    /// Verses across all books.
    pub verses: usize,
    /// Files with the source extension whose names were not recognised.
    pub skipped: Vec<PathBuf>,
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "converted {} old testament and {} new testament books ({} verses)",
            self.old_books, self.new_books, self.verses
        )
    }
}

fn collect_source_paths(root: &Path, extension: &str) -> Result<Vec<PathBuf>, BuildError> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_file() && entry.path().extension() == Some(OsStr::new(extension))
        {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

/// Errors that abort a corpus build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The source directory could not be listed.
    #[error("failed to list source directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// A source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },

    /// A source file contains inconsistent data (strict mode only).
    #[error("{}: {source}", path.display())]
    Source {
        /// The file being parsed.
        path: PathBuf,
        /// What was wrong.
        source: SourceError,
    },

    /// The corpus could not be written.
    #[error("{}: {source}", path.display())]
    Save {
        /// The output path.
        path: PathBuf,
        /// The underlying error.
        source: SaveError,
    },
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn write_source(root: &Path, name: &str, content: &str) {
        fs::write(root.join(name), content).unwrap();
    }

    fn setup_sources() -> TempDir {
        let tmp = TempDir::new().expect("failed to create temp dir");
        let root = tmp.path();
        write_source(
            root,
            "1-01창세기.txt",
            "창1:1 <태초> 하나님이 천지를 창조하시니라\n창1:2 땅이 혼돈하고\n창2:1 천지와 만물이\n",
        );
        write_source(root, "1-02출애굽기.txt", "출1:1 이스라엘의 아들들의 이름은\n");
        write_source(root, "2-01마태복음.txt", "마1:1 아브라함과 다윗의 자손\n");
        tmp
    }

    #[test]
    fn load_all_assigns_testaments() {
        let tmp = setup_sources();
        let dir = Directory::new(tmp.path().to_path_buf()).load_all().unwrap();

        let corpus = dir.corpus();
        assert_eq!(corpus.book_count(Testament::Old), 2);
        assert_eq!(corpus.book_count(Testament::New), 1);

        let genesis = &corpus.testament(Testament::Old)[0];
        assert_eq!(genesis.name(), "창세기");
        assert_eq!(genesis.abbr(), "창");
        assert_eq!(genesis.order(), 1);
        assert_eq!(genesis.chapter(1).unwrap()[&1], "하나님이 천지를 창조하시니라");
    }

    #[test]
    fn report_counts_books_and_verses() {
        let tmp = setup_sources();
        let dir = Directory::new(tmp.path().to_path_buf()).load_all().unwrap();

        let report = dir.report();
        assert_eq!(report.old_books, 2);
        assert_eq!(report.new_books, 1);
        assert_eq!(report.verses, 5);
        assert!(report.skipped.is_empty());
        assert_eq!(
            report.to_string(),
            "converted 2 old testament and 1 new testament books (5 verses)"
        );
    }

    #[test]
    fn book_order_comes_from_filename_not_processing_order() {
        let tmp = TempDir::new().unwrap();
        // Lexically "1-10" sorts before "1-9", but order 9 comes first.
        write_source(tmp.path(), "1-10Ten.txt", "T1:1 ten\n");
        write_source(tmp.path(), "1-9Nine.txt", "N1:1 nine\n");

        let dir = Directory::new(tmp.path().to_path_buf()).load_all().unwrap();
        let names: Vec<_> = dir
            .corpus()
            .testament(Testament::Old)
            .iter()
            .map(Book::name)
            .collect();
        assert_eq!(names, vec!["Nine", "Ten"]);
    }

    #[test]
    fn unrecognised_files_do_not_change_corpus() {
        let clean = setup_sources();
        let expected = Directory::new(clean.path().to_path_buf())
            .load_all()
            .unwrap()
            .into_corpus();

        let noisy = setup_sources();
        write_source(noisy.path(), "README.txt", "창1:1 not a book\n");
        write_source(noisy.path(), "notes-1.txt", "출1:1 also not a book\n");
        write_source(noisy.path(), "1-03레위기.md", "레1:1 wrong extension\n");
        fs::create_dir(noisy.path().join("1-04민수기.txt")).unwrap();

        let dir = Directory::new(noisy.path().to_path_buf()).load_all().unwrap();
        assert_eq!(dir.corpus(), &expected);
        assert_eq!(dir.report().skipped.len(), 2);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let result = Directory::new(tmp.path().join("missing")).load_all();

        assert!(matches!(result, Err(BuildError::Walk(_))));
    }

    #[test]
    fn strict_config_rejects_duplicates() {
        let tmp = TempDir::new().unwrap();
        write_source(tmp.path(), "1-01Gen.txt", "Gen1:1 a\nGen1:1 b\n");
        fs::write(
            tmp.path().join(Config::FILE_NAME),
            "_version = \"1\"\nstrict = true\n",
        )
        .unwrap();

        let result = Directory::new(tmp.path().to_path_buf()).load_all();
        assert!(matches!(result, Err(BuildError::Source { .. })));
    }

    #[test]
    fn custom_extension_from_config() {
        let tmp = TempDir::new().unwrap();
        write_source(tmp.path(), "1-01Gen.bib", "Gen1:1 a\n");
        write_source(tmp.path(), "1-02Exod.txt", "Exod1:1 b\n");
        fs::write(
            tmp.path().join(Config::FILE_NAME),
            "_version = \"1\"\nextension = \"bib\"\n",
        )
        .unwrap();

        let dir = Directory::new(tmp.path().to_path_buf()).load_all().unwrap();
        assert_eq!(dir.corpus().book_count(Testament::Old), 1);
        assert!(dir.corpus().find_book("Gen").is_some());
    }

    #[test]
    fn unreadable_source_aborts_without_output() {
        let tmp = setup_sources();
        fs::write(tmp.path().join("1-03Lev.txt"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();
        let output = tmp.path().join("out").join("bible.json");

        let result = Directory::new(tmp.path().to_path_buf())
            .load_all()
            .and_then(|dir| dir.write_to(&output));

        assert!(matches!(
            result,
            Err(BuildError::Io { ref path, .. }) if path.ends_with("1-03Lev.txt")
        ));
        assert!(!output.exists());
        assert!(!output.parent().unwrap().exists());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_sources_are_read() {
        let tmp = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        write_source(elsewhere.path(), "genesis.txt", "Gen1:1 in the beginning\n");
        std::os::unix::fs::symlink(
            elsewhere.path().join("genesis.txt"),
            tmp.path().join("1-01Gen.txt"),
        )
        .unwrap();

        let dir = Directory::new(tmp.path().to_path_buf()).load_all().unwrap();
        assert!(dir.corpus().find_book("Gen").is_some());
        assert!(dir.report().skipped.is_empty());
    }

    #[test]
    fn write_produces_loadable_artifact() {
        let tmp = setup_sources();
        let output = tmp.path().join("out").join("bible.json");

        let dir = Directory::new(tmp.path().to_path_buf()).load_all().unwrap();
        dir.write_to(&output).unwrap();

        let loaded = artifact::load(&output).unwrap();
        assert_eq!(&loaded, dir.corpus());
    }
}
