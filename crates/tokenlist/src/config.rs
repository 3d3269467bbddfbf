use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::source::{FallbackSource, FileSource, TokenListSource};

/// Where to look for the token list document.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SourceConfig {
    pub primary: PathBuf,
    /// Consulted only when `primary` does not exist.
    pub fallback: Option<PathBuf>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            primary: PathBuf::from("data/tokenlist.json"),
            fallback: Some(PathBuf::from("data/tokenlist.schema.json")),
        }
    }
}

impl SourceConfig {
    pub fn source(&self) -> Box<dyn TokenListSource> {
        let primary = FileSource::new(&self.primary);
        match &self.fallback {
            Some(fallback) => Box::new(FallbackSource::new(primary, FileSource::new(fallback))),
            None => Box::new(primary),
        }
    }
}
