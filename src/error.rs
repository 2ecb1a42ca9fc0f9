//! Error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid length {0}, a password needs at least one character")]
    InvalidLength(usize),

    #[error("invalid word count {0}, a passphrase needs at least one word")]
    InvalidWordCount(usize),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
