//! This bench measures building a verse index and paging through keyword
//! search results over a synthetic corpus.

#![allow(missing_docs)]

use std::num::NonZeroUsize;

use bible::{Book, Corpus, domain::Chapters};
use criterion::{Criterion, criterion_group, criterion_main};

/// Generates a corpus roughly the size of a full bible
fn synthetic_corpus() -> Corpus {
    let words = ["은혜", "평강", "사랑", "믿음", "소망", "빛", "생명", "말씀"];
    let mut books = Vec::new();
    for order in 1..=66 {
        let mut chapters = Chapters::new();
        for chapter in 1..=25 {
            let verses = chapters.entry(chapter).or_default();
            for verse in 1..=20 {
                let idx = (order + chapter + verse) as usize;
                let text = format!(
                    "{}과 {}이 너희에게 있을지어다 {}",
                    words[idx % words.len()],
                    words[(idx / 3) % words.len()],
                    verse
                );
                verses.insert(verse, text);
            }
        }
        books.push(Book::new(format!("book{order}"), format!("b{order}"), order, chapters));
    }
    let new = books.split_off(39);
    Corpus::new(books, new)
}

fn keyword_search(c: &mut Criterion) {
    let corpus = synthetic_corpus();
    let page_size = NonZeroUsize::new(20).unwrap();

    c.bench_function("build index", |b| b.iter(|| corpus.index()));

    let index = corpus.index();
    c.bench_function("search first page", |b| {
        b.iter(|| index.search("사랑", 1, page_size));
    });
    let last_page = index.search("사랑과 믿음", 1, page_size).total_pages;
    assert!(last_page > 1, "the last page bench needs several pages of matches");
    c.bench_function("search last page", |b| {
        b.iter(|| index.search("사랑과 믿음", last_page, page_size));
    });
}

criterion_group!(benches, keyword_search);
criterion_main!(benches);
