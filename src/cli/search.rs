use std::{fmt::Write, num::NonZeroUsize};

use bible::{
    SearchPage, Segment, Testament,
    query::{IndexedVerse, clamp_page},
};
use clap::Parser;
use serde::Serialize;
use tracing::instrument;

use super::{
    Settings,
    terminal::{Colorize, is_narrow},
};

#[derive(Debug, Parser)]
#[command(about = "Search verse text for a keyword (case-sensitive)")]
pub struct Search {
    /// The text to search for
    query: String,

    /// The page of results to show (clamped to the available pages)
    #[arg(long, short, default_value_t = 1)]
    page: usize,

    /// Results per page (defaults to the configured page size)
    #[arg(long)]
    page_size: Option<NonZeroUsize>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchOutput<'a> {
    query: &'a str,
    page: usize,
    total_count: usize,
    total_pages: usize,
    items: Vec<SearchItem<'a>>,
}

#[derive(Debug, Serialize)]
struct SearchItem<'a> {
    reference: String,
    testament: Testament,
    book: &'a str,
    chapter: u32,
    verse: u32,
    text: &'a str,
    segments: Vec<Segment<'a>>,
}

impl<'a> SearchItem<'a> {
    fn new(verse: &IndexedVerse<'a>, query: &str) -> Self {
        Self {
            reference: verse.reference().to_string(),
            testament: verse.testament,
            book: verse.book,
            chapter: verse.chapter,
            verse: verse.verse,
            text: verse.text,
            segments: verse.highlight(query),
        }
    }
}

impl Search {
    #[instrument(level = "debug", skip(settings))]
    pub fn run(self, settings: &Settings) -> anyhow::Result<()> {
        let corpus = settings.load_corpus()?;
        let index = corpus.index();
        let page_size = self
            .page_size
            .unwrap_or_else(|| settings.config().page_size());

        let mut results = index.search(&self.query, self.page, page_size);
        let page = clamp_page(self.page, results.total_pages);
        if page != self.page {
            tracing::debug!("Clamped page {} to {page}", self.page);
            results = index.search(&self.query, page, page_size);
        }

        match self.output {
            OutputFormat::Json => {
                let output = SearchOutput {
                    query: &results.query,
                    page: results.page,
                    total_count: results.total_count,
                    total_pages: results.total_pages,
                    items: results
                        .items
                        .iter()
                        .map(|verse| SearchItem::new(verse, &results.query))
                        .collect(),
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Table => Self::output_table(&results),
        }

        Ok(())
    }

    fn output_table(results: &SearchPage<'_>) {
        if results.query.is_empty() {
            println!("{}", "Enter a keyword to search for.".warning());
            return;
        }

        println!("{}", header(results).info());

        if results.total_count == 0 {
            println!("No verses found.");
            return;
        }

        let narrow = is_narrow();
        for verse in &results.items {
            let reference = verse.reference().to_string();
            let text = render_segments(&verse.highlight(&results.query));
            if narrow {
                println!("{}\n  {text}", reference.dim());
            } else {
                println!("{}  {text}", reference.dim());
            }
        }
    }
}

fn header(results: &SearchPage<'_>) -> String {
    let mut header = format!("\"{}\": {} result(s)", results.query, results.total_count);
    if results.total_pages > 1 {
        let _ = write!(header, " (page {} / {})", results.page, results.total_pages);
    }
    header
}

fn render_segments(segments: &[Segment<'_>]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Plain(text) => (*text).to_string(),
            Segment::Match(text) => text.highlight(),
        })
        .collect()
}
