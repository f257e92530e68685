//! Error types surfaced by user actions.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by session actions. None of them are fatal; the frontend
/// shows a notice and the session stays usable.
#[derive(Error, Debug)]
pub enum Error {
    /// Length field did not hold an integer in the accepted range.
    #[error("{0}")]
    Validation(String),

    /// Copy or save attempted with an empty password field.
    #[error("Nothing to {action} — generate or enter a password first.")]
    EmptyInput { action: &'static str },

    /// The clipboard rejected the copied text.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Writing a save file failed.
    #[error("Failed to save file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Short title for the notice shown to the user.
    pub fn title(&self) -> &'static str {
        match self {
            Error::Validation(_) => "Invalid length",
            Error::EmptyInput { .. } => "No password",
            Error::Clipboard(_) => "Clipboard",
            Error::Io { .. } => "Error",
        }
    }

    /// Whether the notice is a warning rather than an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, Error::EmptyInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
