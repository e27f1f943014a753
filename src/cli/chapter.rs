use bible::{
    VerseSelection,
    query::{ChapterVerse, copy_text},
};
use clap::Parser;
use tracing::instrument;

use super::{Settings, terminal::Colorize};

#[derive(Debug, Parser)]
#[command(about = "Show the verses of a chapter")]
pub struct Chapter {
    /// The full name of the book
    book: String,

    /// The chapter number
    #[arg(value_name = "CHAPTER")]
    number: u32,

    /// Only show some verses, e.g. `1-3,5`
    #[arg(long, short)]
    select: Option<VerseSelection>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    /// `<verse> <text>` lines, ready to paste
    Copy,
    Json,
}

impl Chapter {
    #[instrument(level = "debug", skip(settings))]
    pub fn run(self, settings: &Settings) -> anyhow::Result<()> {
        let corpus = settings.load_corpus()?;
        let verses = corpus.lookup_chapter(&self.book, self.number)?;

        match self.output {
            OutputFormat::Copy => println!("{}", copy_text(&verses, self.select.as_ref())),
            OutputFormat::Json => {
                let selected = self.selected(&verses);
                println!("{}", serde_json::to_string_pretty(&selected)?);
            }
            OutputFormat::Pretty => self.output_pretty(&verses),
        }

        Ok(())
    }

    fn selected<'a>(&self, verses: &[ChapterVerse<'a>]) -> Vec<ChapterVerse<'a>> {
        verses
            .iter()
            .filter(|v| self.select.as_ref().is_none_or(|s| s.contains(v.verse)))
            .copied()
            .collect()
    }

    fn output_pretty(&self, verses: &[ChapterVerse<'_>]) {
        let title = format!("{} {}", self.book, self.number);
        if verses.is_empty() {
            println!("{} has no verses", title.warning());
            return;
        }

        println!("{}  {}", title.info(), format!("{} verses", verses.len()).dim());
        if let Some(selection) = &self.select {
            println!("{}", format!("selected: {selection}").dim());
        }
        println!();

        for verse in self.selected(verses) {
            println!("{}  {}", format!("{:>4}", verse.verse).dim(), verse.text);
        }
    }
}
