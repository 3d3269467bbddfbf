use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;
use crate::query::PairFilter;
use crate::types::entry::TokenEntry;
use crate::types::list::TokenList;
use crate::types::pair::SupportPair;

/// A selectable token: symbol plus `"SYMBOL (Name)"` label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenOption {
    pub symbol: String,
    pub label: String,
}

/// Distinct entry-level tokens, sorted by symbol.
///
/// Grouped entries contribute their unified symbol and name, not their
/// sub-tokens. The first entry seen for a symbol provides the label.
pub fn unique_tokens(entries: &[TokenEntry]) -> Vec<TokenOption> {
    let mut seen = HashSet::new();
    let mut tokens = Vec::new();

    for entry in entries {
        let (Some(symbol), Some(name)) = (entry.symbol(), entry.name()) else {
            continue;
        };
        if symbol.is_empty() || !seen.insert(symbol) {
            continue;
        }
        tokens.push(TokenOption {
            symbol: symbol.to_string(),
            label: format!("{symbol} ({name})"),
        });
    }

    tokens.sort_by(|a, b| collate(&a.symbol, &b.symbol));
    tokens
}

/// Distinct chain names across all pairs, sorted.
pub fn unique_chains(pairs: &[SupportPair]) -> Vec<String> {
    let mut chains: Vec<String> = pairs
        .iter()
        .map(|p| p.chain_name.as_str())
        .collect::<HashSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect();
    chains.sort_by(|a, b| collate(a, b));
    chains
}

/// Approximate locale ordering: case-insensitive first, lowercase before
/// uppercase on a case-only difference, then plain code point order.
///
/// Only ASCII letters collate like a locale would. Accented and other
/// non-ASCII letters sort by code point, so `é` lands after `z` instead of
/// next to `e`.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

fn case_order(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            return y.is_lowercase().cmp(&x.is_lowercase());
        }
    }
    Ordering::Equal
}

/// Match counts for the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairSummary {
    pub matched: usize,
    pub total: usize,
}

/// Everything derived from one token list document.
///
/// Built once per document and reused across selection changes; build a new
/// index when the document is replaced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenIndex {
    pub pairs: Vec<SupportPair>,
    pub tokens: Vec<TokenOption>,
    pub chains: Vec<String>,
}

impl TokenIndex {
    pub fn build(list: &TokenList) -> Self {
        let pairs = normalize(&list.tokens);
        let tokens = unique_tokens(&list.tokens);
        let chains = unique_chains(&pairs);

        tracing::info!(
            pairs = pairs.len(),
            tokens = tokens.len(),
            chains = chains.len(),
            "built token index"
        );

        Self {
            pairs,
            tokens,
            chains,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn filter(&self, filter: &PairFilter) -> Vec<SupportPair> {
        filter.apply(&self.pairs)
    }

    pub fn summary(&self, filter: &PairFilter) -> PairSummary {
        PairSummary {
            matched: self.pairs.iter().filter(|p| filter.matches(p)).count(),
            total: self.pairs.len(),
        }
    }

    /// Look up the label for a token symbol.
    pub fn token_label(&self, symbol: &str) -> Option<&str> {
        self.tokens
            .iter()
            .find(|t| t.symbol == symbol)
            .map(|t| t.label.as_str())
    }
}

impl From<&TokenList> for TokenIndex {
    fn from(list: &TokenList) -> Self {
        TokenIndex::build(list)
    }
}
