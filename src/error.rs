//! Error taxonomy for engine construction.
//!
//! All failures happen while loading the two input resources; once an
//! engine is constructed, scoring and ranking cannot fail.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// An input resource is missing or unreadable.
    #[error("Resource not found: {}: {source}", .path.display())]
    ResourceNotFound { path: PathBuf, source: io::Error },

    /// A line in the letter-value resource does not parse as `letter:integer`.
    #[error("Malformed letter value entry at {}:{line_no}: {line:?}", .path.display())]
    MalformedLetterEntry {
        path: PathBuf,
        line_no: usize,
        line: String,
    },
}
