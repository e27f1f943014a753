use bible::{Corpus, Testament};
use clap::Parser;
use serde::Serialize;
use tracing::instrument;

use super::{Settings, terminal::Colorize};

#[derive(Debug, Parser)]
#[command(about = "List the books of the corpus with their chapter counts")]
pub struct Books {
    /// Only list books of one testament
    #[arg(long, value_enum)]
    testament: Option<TestamentArg>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum TestamentArg {
    Old,
    New,
}

impl From<TestamentArg> for Testament {
    fn from(arg: TestamentArg) -> Self {
        match arg {
            TestamentArg::Old => Self::Old,
            TestamentArg::New => Self::New,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Serialize)]
struct BookRow<'a> {
    testament: Testament,
    name: &'a str,
    abbr: &'a str,
    order: u32,
    chapters: usize,
    verses: usize,
}

impl Books {
    #[instrument(level = "debug", skip(settings))]
    pub fn run(self, settings: &Settings) -> anyhow::Result<()> {
        let corpus = settings.load_corpus()?;
        let rows = collect_rows(&corpus, self.testament.map(Testament::from));

        match self.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
            OutputFormat::Table => {
                if rows.is_empty() {
                    println!("No books found. Build a corpus with 'bible build'.");
                }
                let mut current = None;
                for row in &rows {
                    if current != Some(row.testament) {
                        println!("{}", row.testament.label().info());
                        current = Some(row.testament);
                    }
                    println!(
                        "  {:>3}  {} ({})  {}",
                        row.order,
                        row.name,
                        row.abbr,
                        format!("{} chapters, {} verses", row.chapters, row.verses).dim()
                    );
                }
            }
        }

        Ok(())
    }
}

fn collect_rows(corpus: &Corpus, testament: Option<Testament>) -> Vec<BookRow<'_>> {
    corpus
        .books()
        .filter(|(t, _)| testament.is_none_or(|wanted| wanted == *t))
        .map(|(testament, book)| BookRow {
            testament,
            name: book.name(),
            abbr: book.abbr(),
            order: book.order(),
            chapters: book.chapters().len(),
            verses: book.total_verses(),
        })
        .collect()
}
