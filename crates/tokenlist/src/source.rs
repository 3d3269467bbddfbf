use std::io;
use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::types::list::TokenList;

/// Trait for token list document sources (in-memory, filesystem, etc.).
pub trait TokenListSource {
    fn load(&self) -> Result<TokenList, LoadError>;
}

impl<S: TokenListSource + ?Sized> TokenListSource for Box<S> {
    fn load(&self) -> Result<TokenList, LoadError> {
        (**self).load()
    }
}

/// Static in-memory source for testing and embedding.
pub struct StaticSource {
    name: String,
    document: Option<TokenList>,
}

impl StaticSource {
    pub fn new(document: TokenList) -> Self {
        Self {
            name: "static token list".to_string(),
            document: Some(document),
        }
    }

    /// Parse the document up front; the source then always serves it.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let document =
            TokenList::from_json(json).map_err(|e| LoadError::Parse(e.to_string()))?;
        Ok(Self::new(document))
    }

    /// A source whose document does not exist.
    pub fn missing(name: &str) -> Self {
        Self {
            name: name.to_string(),
            document: None,
        }
    }
}

impl TokenListSource for StaticSource {
    fn load(&self) -> Result<TokenList, LoadError> {
        self.document
            .clone()
            .ok_or_else(|| LoadError::NotFound(format!("{} not found", self.name)))
    }
}

/// Reads a token list from one file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenListSource for FileSource {
    fn load(&self) -> Result<TokenList, LoadError> {
        let bytes = std::fs::read(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => {
                LoadError::NotFound(format!("{} not found", self.path.display()))
            }
            _ => LoadError::Io(format!("{}: {e}", self.path.display())),
        })?;

        let list = TokenList::from_slice(&bytes)
            .map_err(|e| LoadError::Parse(format!("{}: {e}", self.path.display())))?;

        tracing::debug!(path = %self.path.display(), entries = list.tokens.len(), "loaded token list");
        Ok(list)
    }
}

/// Tries `primary`, and only when it is not found, `secondary`.
///
/// Any other primary failure is returned as is.
pub struct FallbackSource<P, S> {
    primary: P,
    secondary: S,
}

impl<P, S> FallbackSource<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P: TokenListSource, S: TokenListSource> TokenListSource for FallbackSource<P, S> {
    fn load(&self) -> Result<TokenList, LoadError> {
        match self.primary.load() {
            Err(err) if err.is_not_found() => {
                tracing::warn!(%err, "primary token list missing, trying fallback");
                match self.secondary.load() {
                    Err(err) if err.is_not_found() => {
                        Err(LoadError::NotFound("token list not found".to_string()))
                    }
                    other => other,
                }
            }
            other => other,
        }
    }
}
