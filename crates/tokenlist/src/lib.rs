pub mod config;
pub mod error;
pub mod index;
pub mod normalize;
pub mod query;
pub mod source;
pub mod state;
pub mod types;

use error::Error;

// Re-exports for convenience
pub use config::SourceConfig;
pub use index::{unique_chains, unique_tokens, PairSummary, TokenIndex, TokenOption};
pub use normalize::normalize;
pub use query::{filter_pairs, PairFilter};
pub use source::{FallbackSource, FileSource, StaticSource, TokenListSource};
pub use state::LoadState;
pub use types::deployment::{Deployment, DeploymentKind};
pub use types::entry::{GroupedEntry, TokenAsset, TokenEntry};
pub use types::list::TokenList;
pub use types::pair::SupportPair;
pub use types::price::{PriceFeedResponse, PriceQuote};

/// Result of one explorer query: the selectable tokens and chains plus the
/// pairs matching the selection.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Exploration {
    pub tokens: Vec<TokenOption>,
    pub chains: Vec<String>,
    pub pairs: Vec<SupportPair>,
    pub summary: PairSummary,
}

/// Normalize, index and filter a token list document in one pass.
pub fn explore(list: &TokenList, filter: &PairFilter) -> Exploration {
    let index = TokenIndex::build(list);
    let pairs = index.filter(filter);
    let summary = PairSummary {
        matched: pairs.len(),
        total: index.pairs.len(),
    };

    Exploration {
        tokens: index.tokens,
        chains: index.chains,
        pairs,
        summary,
    }
}

/// High-level convenience: load the document from `source`, then explore it.
pub fn explore_source(
    source: &dyn TokenListSource,
    filter: &PairFilter,
) -> Result<Exploration, Error> {
    let list = source.load()?;
    Ok(explore(&list, filter))
}
