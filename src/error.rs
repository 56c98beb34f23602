use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GamedlError>;

#[derive(Error, Debug)]
pub enum GamedlError {
    #[error("failed to read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("catalog {path} is not a valid game list: {source}")]
    CatalogParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("selection '{input}' is not a number")]
    InvalidSelectionInput { input: String },

    #[error("selection {choice} is out of range (valid: 1-{len})")]
    SelectionOutOfRange { choice: i64, len: usize },

    #[error("download failed for {url}: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GamedlError {
    /// Process exit code for this failure: 1 catalog, 2 selection, 3 download.
    pub fn exit_code(&self) -> i32 {
        match self {
            GamedlError::CatalogRead { .. } | GamedlError::CatalogParse { .. } => 1,
            GamedlError::InvalidSelectionInput { .. }
            | GamedlError::SelectionOutOfRange { .. } => 2,
            GamedlError::Network { .. } | GamedlError::FileWrite { .. } => 3,
            GamedlError::Io(_) => 1,
        }
    }
}
