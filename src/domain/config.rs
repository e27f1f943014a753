use std::{
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

/// Configuration for converting and querying a scripture corpus.
///
/// This struct holds settings that control which source files are read,
/// where the corpus is written, how search results are paged, and how
/// strictly inconsistent source data is treated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The extension of source files, without the leading dot.
    extension: String,

    /// Where the built corpus is written.
    output: PathBuf,

    /// Number of keyword search results per page.
    page_size: NonZeroUsize,

    /// Whether duplicate verses and changing abbreviations within a source
    /// file are treated as errors.
    ///
    /// When `false` (default): the last occurrence wins and a warning is
    /// logged.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            output: default_output(),
            page_size: default_page_size(),
            strict: false,
        }
    }
}

impl Config {
    /// The conventional name of the configuration file in a source directory.
    pub const FILE_NAME: &'static str = "bible.toml";

    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Loads `bible.toml` from a source directory, falling back to the
    /// defaults if it is missing or invalid.
    #[must_use]
    pub fn load_or_default(root: &Path) -> Self {
        let path = root.join(Self::FILE_NAME);
        Self::load(&path).unwrap_or_else(|e| {
            tracing::debug!("Failed to load config: {e}");
            Self::default()
        })
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// The source file extension, without the leading dot.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The path the corpus is written to.
    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Overrides the output path.
    pub fn set_output(&mut self, output: PathBuf) {
        self.output = output;
    }

    /// Number of keyword search results per page.
    #[must_use]
    pub const fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }
}

fn default_extension() -> String {
    "txt".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("src/data/bible.json")
}

const fn default_page_size() -> NonZeroUsize {
    NonZeroUsize::new(20).expect("20 is non-zero")
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_extension")]
        extension: String,

        #[serde(default = "default_output")]
        output: PathBuf,

        #[serde(default = "default_page_size")]
        page_size: NonZeroUsize,

        #[serde(default)]
        strict: bool,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                extension,
                output,
                page_size,
                strict,
            } => Self {
                extension: extension.trim_start_matches('.').to_string(),
                output,
                page_size,
                strict,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            extension: config.extension,
            output: config.output,
            page_size: config.page_size,
            strict: config.strict,
        }
    }
}
