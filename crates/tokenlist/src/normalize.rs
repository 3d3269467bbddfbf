use crate::types::entry::TokenEntry;
use crate::types::pair::SupportPair;

/// Flatten token list entries into support pairs.
///
/// Grouped entries yield one pair per (sub-token, deployment) using the
/// sub-token's identity; flat entries yield one pair per deployment.
/// Unrecognized entries are skipped. Order follows the input and nothing is
/// deduplicated.
pub fn normalize(entries: &[TokenEntry]) -> Vec<SupportPair> {
    let mut pairs = Vec::new();
    let mut skipped = 0usize;

    for entry in entries {
        if !entry.is_recognized() {
            skipped += 1;
            continue;
        }
        for asset in entry.assets() {
            pairs.extend(
                asset
                    .deployments
                    .iter()
                    .map(|deployment| SupportPair::new(asset, deployment)),
            );
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, "skipped unrecognized token list entries");
    }
    tracing::debug!(entries = entries.len(), pairs = pairs.len(), "normalized token list");

    pairs
}
