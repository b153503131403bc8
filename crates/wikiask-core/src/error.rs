use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("index storage unavailable at {}: {reason}", .path.display())]
    StorageUnavailable { path: PathBuf, reason: String },

    #[error("query failed to parse: {0}")]
    QuerySyntax(String),

    #[error("search failed: {0}")]
    Search(String),

    #[error("normalization failed: {0}")]
    Normalization(String),

    #[error("malformed question file: {0}")]
    QuestionFile(String),
}

pub type Result<T> = std::result::Result<T, Error>;
