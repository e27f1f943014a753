/// Reading and writing the serialized corpus.
pub mod artifact;
pub use artifact::LoadError;

/// Building a corpus from a directory of source files.
pub mod directory;
pub use directory::{BuildError, BuildReport, Directory};

mod path_parser;
pub use path_parser::{SourceName, parse_source_name};

/// Line parsing for scripture source files.
pub mod source;
pub use source::{ParsedSource, SourceError, SourceLine, parse_line};
