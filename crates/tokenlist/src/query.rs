use serde::{Deserialize, Serialize};

use crate::types::pair::SupportPair;

/// Keep the pairs matching an optional token symbol and an optional chain name.
///
/// An absent or empty selector matches everything. Matching is exact and the
/// input order is preserved.
pub fn filter_pairs(
    pairs: &[SupportPair],
    selected_token: Option<&str>,
    selected_chain: Option<&str>,
) -> Vec<SupportPair> {
    PairFilter::new(selected_token, selected_chain).apply(pairs)
}

/// The current token/chain selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
}

impl PairFilter {
    /// Empty strings are normalized to "no selection".
    pub fn new(token: Option<&str>, chain: Option<&str>) -> Self {
        Self {
            token: selector(token),
            chain: selector(chain),
        }
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = selector(Some(token));
        self
    }

    pub fn with_chain(mut self, chain: &str) -> Self {
        self.chain = selector(Some(chain));
        self
    }

    /// True when at least one selector is set.
    pub fn is_active(&self) -> bool {
        self.token.is_some() || self.chain.is_some()
    }

    /// Drop both selections.
    pub fn clear(&mut self) {
        self.token = None;
        self.chain = None;
    }

    pub fn matches(&self, pair: &SupportPair) -> bool {
        let token_ok = self.token.as_deref().map_or(true, |t| pair.symbol == t);
        let chain_ok = self.chain.as_deref().map_or(true, |c| pair.chain_name == c);
        token_ok && chain_ok
    }

    pub fn apply(&self, pairs: &[SupportPair]) -> Vec<SupportPair> {
        pairs.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

fn selector(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
