use serde::{Deserialize, Serialize};

use crate::domain::{Book, Testament};

/// The complete structured scripture dataset.
///
/// Books within each testament are kept sorted by [`Book::order`]. A corpus is
/// built once and never mutated afterwards, so it can be shared freely between
/// readers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Testaments", into = "Testaments")]
pub struct Corpus {
    old_testament: Vec<Book>,
    new_testament: Vec<Book>,
}

impl Corpus {
    /// Assembles a corpus, sorting each testament by book order.
    ///
    /// The sort is stable, so books sharing an order keep their relative
    /// position.
    #[must_use]
    pub fn new(mut old_testament: Vec<Book>, mut new_testament: Vec<Book>) -> Self {
        old_testament.sort_by_key(Book::order);
        new_testament.sort_by_key(Book::order);
        Self {
            old_testament,
            new_testament,
        }
    }

    /// The books of one testament, in order.
    #[must_use]
    pub fn testament(&self, testament: Testament) -> &[Book] {
        match testament {
            Testament::Old => &self.old_testament,
            Testament::New => &self.new_testament,
        }
    }

    /// All books, old testament first.
    pub fn books(&self) -> impl Iterator<Item = (Testament, &Book)> {
        Testament::ALL.into_iter().flat_map(move |testament| {
            self.testament(testament)
                .iter()
                .map(move |book| (testament, book))
        })
    }

    /// Finds a book by its full name.
    #[must_use]
    pub fn find_book(&self, name: &str) -> Option<&Book> {
        self.books()
            .map(|(_, book)| book)
            .find(|book| book.name() == name)
    }

    /// Number of books in one testament.
    #[must_use]
    pub fn book_count(&self, testament: Testament) -> usize {
        self.testament(testament).len()
    }

    /// Number of verses across the whole corpus.
    #[must_use]
    pub fn verse_count(&self) -> usize {
        self.books().map(|(_, book)| book.total_verses()).sum()
    }

    /// Returns `true` if neither testament has any books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.old_testament.is_empty() && self.new_testament.is_empty()
    }
}

/// The serialized shape of the corpus.
///
/// Testament keys match the artifact consumed by the web front end. The
/// camelCase names are accepted when loading.
#[derive(Debug, Serialize, Deserialize)]
struct Testaments {
    #[serde(rename = "구약", alias = "oldTestament", default)]
    old_testament: Vec<Book>,

    #[serde(rename = "신약", alias = "newTestament", default)]
    new_testament: Vec<Book>,
}

impl From<Testaments> for Corpus {
    fn from(testaments: Testaments) -> Self {
        Self::new(testaments.old_testament, testaments.new_testament)
    }
}

impl From<Corpus> for Testaments {
    fn from(corpus: Corpus) -> Self {
        Self {
            old_testament: corpus.old_testament,
            new_testament: corpus.new_testament,
        }
    }
}
