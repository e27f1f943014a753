//! Read-only queries over a loaded corpus.
//!
//! Nothing here mutates the corpus, so a [`Corpus`](crate::Corpus) and any
//! [`VerseIndex`] built from it can be shared between threads without locking.

mod highlight;
mod index;
mod lookup;
mod search;
mod selection;

pub use highlight::{Segment, highlight};
pub use index::{IndexedVerse, Reference, VerseIndex};
pub use lookup::{ChapterVerse, QueryError, copy_text};
pub use search::{SearchPage, clamp_page};
pub use selection::{SelectionError, VerseSelection};
