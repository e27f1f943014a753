use std::path::PathBuf;

mod books;
mod build;
mod chapter;
mod search;
mod terminal;

use anyhow::Context;
use bible::{Config, Corpus, storage::artifact};
use books::Books;
use build::Build;
use chapter::Chapter;
use clap::ArgAction;
use search::Search;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a configuration file
    ///
    /// When building, defaults to `bible.toml` in the source directory.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// The corpus file to query (defaults to the configured output path)
    #[arg(long, global = true)]
    corpus: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = self
            .config
            .as_deref()
            .map(|path| {
                Config::load(path)
                    .map_err(|e| anyhow::anyhow!(e))
                    .with_context(|| format!("invalid config at {}", path.display()))
            })
            .transpose()?;

        let settings = Settings {
            config,
            corpus: self.corpus,
        };

        self.command.run(&settings)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// Options shared by every command.
#[derive(Debug, Default)]
pub struct Settings {
    /// Configuration given with `--config`, if any.
    config: Option<Config>,
    /// Corpus path given with `--corpus`, if any.
    corpus: Option<PathBuf>,
}

impl Settings {
    /// The configuration from `--config`, or the defaults.
    fn config(&self) -> Config {
        self.config.clone().unwrap_or_default()
    }

    fn corpus_path(&self) -> PathBuf {
        self.corpus
            .clone()
            .unwrap_or_else(|| self.config().output().to_path_buf())
    }

    fn load_corpus(&self) -> anyhow::Result<Corpus> {
        let path = self.corpus_path();
        let corpus = artifact::load(&path)
            .with_context(|| format!("failed to load corpus from {}", path.display()))?;
        tracing::debug!(
            "Loaded {} books ({} verses) from {}",
            corpus.books().count(),
            corpus.verse_count(),
            path.display()
        );
        Ok(corpus)
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Convert a directory of source text files into a corpus
    Build(Build),

    /// List the books of the corpus
    Books(Books),

    /// Show the verses of a chapter
    Chapter(Chapter),

    /// Search verse text for a keyword
    Search(Search),
}

impl Command {
    fn run(self, settings: &Settings) -> anyhow::Result<()> {
        match self {
            Self::Build(command) => command.run(settings)?,
            Self::Books(command) => command.run(settings)?,
            Self::Chapter(command) => command.run(settings)?,
            Self::Search(command) => command.run(settings)?,
        }
        Ok(())
    }
}
