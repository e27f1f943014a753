use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two top-level partitions of the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Testament {
    /// The old testament.
    Old,
    /// The new testament.
    New,
}

impl Testament {
    /// Both testaments, in corpus iteration order.
    pub const ALL: [Self; 2] = [Self::Old, Self::New];

    /// Maps the leading digit of a source filename to a testament.
    ///
    /// `'1'` is the old testament. Any other digit is the new testament; the
    /// split is binary, not a lookup table.
    #[must_use]
    pub const fn from_digit(digit: char) -> Self {
        if digit == '1' { Self::Old } else { Self::New }
    }

    /// The key used for this testament in the serialized corpus.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Old => "구약",
            Self::New => "신약",
        }
    }
}

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Old => write!(f, "old"),
            Self::New => write!(f, "new"),
        }
    }
}
