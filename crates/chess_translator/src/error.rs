//! Error types for the translator driver
//!
//! Rule violations are never errors here; they are logged and play goes on.
//! Only I/O on the input, the log or the console can fail a session.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TranslatorError {
    /// Log file could not be created
    #[error("cannot create log file {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading input or writing the log failed mid-session
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type TranslatorResult<T> = Result<T, TranslatorError>;
