//! Error taxonomy shared by the core components. Three classes cover every
//! failure the application can surface: bad user input, a selection that no
//! longer matches the store, and an unreadable contact file. All of them are
//! reported and none terminate the process.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Bad or missing user input: required field empty, non-numeric value,
    /// impossible calendar date, non-positive height.
    #[error("{0}")]
    Validation(String),

    /// An operation targeted a list position that does not exist, whether a
    /// contact slot or a unit-picker entry. Callers are expected to validate
    /// the selection first, so hitting this usually means a refresh was
    /// skipped after a mutation.
    #[error("index {index} is out of bounds for a list of {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The contact file exists but is not valid JSON. Propagated untouched;
    /// the store never attempts to repair or overwrite a file it cannot read.
    #[error("contact file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for building a validation error from any message.
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
