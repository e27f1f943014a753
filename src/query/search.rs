use std::num::NonZeroUsize;

use serde::Serialize;

use crate::query::{IndexedVerse, VerseIndex};

/// One page of keyword search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage<'a> {
    /// The trimmed query that was matched.
    pub query: String,
    /// The requested page, 1-based.
    pub page: usize,
    /// Number of matching verses across all pages.
    pub total_count: usize,
    /// `ceil(total_count / page_size)`.
    pub total_pages: usize,
    /// Matching verses on this page, in reading order.
    pub items: Vec<IndexedVerse<'a>>,
}

impl<'a> VerseIndex<'a> {
    /// Case-sensitive substring search over verse text.
    ///
    /// The query is trimmed first; an empty query matches nothing. `page` is
    /// 1-based and is not validated: a page outside `1..=total_pages` is
    /// simply empty. Use [`clamp_page`] to bring a user supplied page in
    /// range.
    #[must_use]
    pub fn search(&self, query: &str, page: usize, page_size: NonZeroUsize) -> SearchPage<'a> {
        let query = query.trim();
        let page_size = page_size.get();

        let matches: Vec<&IndexedVerse<'a>> = if query.is_empty() {
            Vec::new()
        } else {
            self.entries()
                .iter()
                .filter(|entry| entry.text.contains(query))
                .collect()
        };

        let total_count = matches.len();
        let items: Vec<IndexedVerse<'a>> = page
            .checked_sub(1)
            .and_then(|p| p.checked_mul(page_size))
            .map(|start| {
                matches
                    .iter()
                    .skip(start)
                    .take(page_size)
                    .map(|&&entry| entry)
                    .collect()
            })
            .unwrap_or_default();

        SearchPage {
            query: query.to_string(),
            page,
            total_count,
            total_pages: total_count.div_ceil(page_size),
            items,
        }
    }
}

/// Clamps a requested page into `1..=total_pages`.
///
/// With no pages at all the result is page 1.
#[must_use]
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}
