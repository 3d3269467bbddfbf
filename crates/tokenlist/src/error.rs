use thiserror::Error;

/// Unified error type for the token list library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    #[error("price feed error: {0}")]
    PriceFeed(String),
}

/// Errors while retrieving a token list document.
///
/// The `Display` output is the message shown to the user when loading fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("{0}")]
    NotFound(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("parse error: {0}")]
    Parse(String),
}

impl LoadError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound(_))
    }
}
