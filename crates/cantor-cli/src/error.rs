use thiserror::Error;

/// Errors raised by CLI commands before the library is reached.
#[derive(Error, Debug)]
pub enum CliError {
    /// Reading the input failed.
    #[error("failed to read {source_name}: {source}")]
    Read {
        /// File path, or `stdin`.
        source_name: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Input is not JSON, or not a CNF document.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
