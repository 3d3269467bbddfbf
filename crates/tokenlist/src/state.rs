use crate::error::LoadError;
use crate::index::TokenIndex;
use crate::source::TokenListSource;
use crate::types::list::TokenList;

/// Lifecycle of the token list document.
///
/// `NotLoaded -> Loading -> Ready | Failed`. There is no retry; call
/// [`LoadState::begin`] again to start over.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    Ready(TokenIndex),
    Failed(String),
}

impl LoadState {
    /// Run a full load against `source`.
    pub fn load(source: &dyn TokenListSource) -> Self {
        let mut state = LoadState::NotLoaded;
        state.begin();
        state.finish(source.load());
        state
    }

    pub fn begin(&mut self) {
        *self = LoadState::Loading;
    }

    /// Settle a pending load. Results arriving when no load is pending are
    /// discarded and `false` is returned.
    pub fn finish(&mut self, result: Result<TokenList, LoadError>) -> bool {
        if !self.is_loading() {
            tracing::debug!("discarding token list result, no load pending");
            return false;
        }

        *self = match result {
            Ok(list) => LoadState::Ready(TokenIndex::build(&list)),
            Err(err) => {
                tracing::warn!(%err, "token list load failed");
                LoadState::Failed(err.to_string())
            }
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn index(&self) -> Option<&TokenIndex> {
        match self {
            LoadState::Ready(index) => Some(index),
            _ => None,
        }
    }

    /// The message to show when loading failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{FallbackSource, StaticSource};

    #[test]
    fn test_load_ready() {
        let source = StaticSource::from_json(
            r#"{
                "tokens": [
                    {
                        "defuseAssetId": "nep141:wrap.near",
                        "symbol": "wNEAR",
                        "name": "Wrapped NEAR",
                        "decimals": 24,
                        "icon": "",
                        "originChainName": "near",
                        "deployments": [
                            { "chainName": "near", "decimals": 24, "bridge": "direct", "address": "wrap.near" }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        let state = LoadState::load(&source);
        let index = state.index().unwrap();
        assert_eq!(index.pairs.len(), 1);
        assert_eq!(index.chains, ["near"]);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_load_failed() {
        let source = FallbackSource::new(StaticSource::missing("a"), StaticSource::missing("b"));
        let state = LoadState::load(&source);
        assert_eq!(state, LoadState::Failed("token list not found".to_string()));
        assert_eq!(state.error(), Some("token list not found"));
        assert!(state.index().is_none());
    }

    #[test]
    fn test_finish_without_begin_is_discarded() {
        let mut state = LoadState::default();
        assert!(!state.finish(Ok(TokenList::default())));
        assert_eq!(state, LoadState::NotLoaded);

        state.begin();
        assert!(state.is_loading());
        assert!(state.finish(Err(LoadError::Io("timeout".to_string()))));
        assert_eq!(state.error(), Some("io error: timeout"));

        // a late second result does not overwrite the settled state
        assert!(!state.finish(Ok(TokenList::default())));
        assert!(state.error().is_some());
    }
}
