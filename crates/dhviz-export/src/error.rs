use thiserror::Error;

use dhviz_core::ChainError;

/// Errors raised while exporting or importing a chain.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Chain error: {0}")]
    Chain(#[from] ChainError),

    #[error("Share URL has no `{0}` parameter")]
    MissingParameter(String),

    #[error("Invalid CSV row {row}: {message}")]
    InvalidRow { row: usize, message: String },

    #[error("Exported data is not valid UTF-8")]
    InvalidUtf8,
}
