//! Error types for the table generators.

use thiserror::Error;

/// Result type for generator runs.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a generator run.
#[derive(Debug, Error)]
pub enum Error {
    /// An input record could not be parsed.
    #[error("line {line}: {source} (in {content:?})")]
    Record {
        line: usize,
        content: String,
        #[source]
        source: heesch_iamond::Error,
    },

    /// Unrecognised output format argument.
    #[error("unknown output format {0:?}, expected \"cpp\" or \"json\"")]
    UnknownFormat(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
