use std::path::PathBuf;

use bible::{Config, Directory, Testament};
use clap::Parser;
use tracing::instrument;

use super::{Settings, terminal::Colorize};

#[derive(Debug, Parser)]
#[command(about = "Convert a directory of source text files into a corpus")]
pub struct Build {
    /// Directory containing `<digit>-<digits><name>.txt` source files
    source: PathBuf,

    /// Where to write the corpus (overrides the configured output)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Treat duplicate verses and changing abbreviations as errors
    #[arg(long)]
    strict: bool,

    /// Only print the output path
    #[arg(long)]
    quiet: bool,
}

impl Build {
    #[instrument(level = "debug", skip(settings))]
    pub fn run(self, settings: &Settings) -> anyhow::Result<()> {
        let mut config = settings
            .config
            .clone()
            .unwrap_or_else(|| Config::load_or_default(&self.source));
        if let Some(output) = self.output {
            config.set_output(output);
        }
        if self.strict {
            config.strict = true;
        }

        let directory = Directory::with_config(self.source, config).load_all()?;
        let output = directory.write()?;

        if self.quiet {
            println!("{}", output.display());
            return Ok(());
        }

        let report = directory.report();
        let corpus = directory.corpus();
        println!("{} {}", "Wrote".success(), output.display());
        println!(
            "  {}: {} books",
            Testament::Old.label(),
            corpus.book_count(Testament::Old)
        );
        println!(
            "  {}: {} books",
            Testament::New.label(),
            corpus.book_count(Testament::New)
        );
        println!("  {}", format!("{} verses", report.verses).dim());

        if !report.skipped.is_empty() {
            println!(
                "\n{}",
                format!("Skipped {} unrecognised file(s):", report.skipped.len()).warning()
            );
            for path in &report.skipped {
                println!("  • {}", path.display());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use bible::storage::artifact;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn build_writes_corpus_to_output() {
        let tmp = tempdir().unwrap();
        let source = tmp.path().join("bible");
        fs::create_dir(&source).unwrap();
        fs::write(
            source.join("1-01창세기.txt"),
            "창1:1 <태초> 하나님이 천지를 창조하시니라\n",
        )
        .unwrap();
        fs::write(source.join("2-01마태복음.txt"), "마1:1 아브라함과 다윗의 자손\n").unwrap();

        let output = tmp.path().join("out").join("bible.json");
        let build = Build {
            source,
            output: Some(output.clone()),
            strict: false,
            quiet: true,
        };

        build.run(&Settings::default()).expect("build should succeed");

        let corpus = artifact::load(&output).unwrap();
        assert_eq!(corpus.book_count(Testament::Old), 1);
        assert_eq!(corpus.book_count(Testament::New), 1);
        assert_eq!(corpus.verse_count(), 2);
    }

    #[test]
    fn strict_build_fails_without_output() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("1-01Gen.txt"), "Gen1:1 a\nGen1:1 b\n").unwrap();

        let output = tmp.path().join("bible.json");
        let build = Build {
            source: tmp.path().to_path_buf(),
            output: Some(output.clone()),
            strict: true,
            quiet: true,
        };

        assert!(build.run(&Settings::default()).is_err());
        assert!(!output.exists());
    }
}
