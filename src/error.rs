use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CtxError {
    // Environment-related errors
    #[error("Home directory not found")]
    HomeDirNotFound,

    // History index errors
    #[error("Failed to read history index: {path}")]
    IndexRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("History index is empty: {path}")]
    IndexEmpty { path: PathBuf },

    #[error("Failed to parse last history entry: {path}")]
    IndexParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // Transcript errors
    #[error("Failed to read transcript: {path}")]
    TranscriptRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CtxError {
    /// True for every failure that happened while looking up the session in the history index
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            CtxError::IndexRead { .. } | CtxError::IndexEmpty { .. } | CtxError::IndexParse { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CtxError>;
