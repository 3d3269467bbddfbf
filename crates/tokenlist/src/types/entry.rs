use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::deployment::Deployment;
use super::lenient::deserialize_each;

/// A single defuse asset with its own deployments.
///
/// Used both for flat token list entries and for the sub-tokens of a grouped entry.
/// Malformed deployments are dropped individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAsset {
    #[serde(rename = "defuseAssetId")]
    pub asset_id: String,

    pub symbol: String,

    pub name: String,

    #[serde(default)]
    pub decimals: u8,

    #[serde(default)]
    pub icon: String,

    #[serde(rename = "originChainName")]
    #[serde(default)]
    pub origin_chain_name: String,

    #[serde(deserialize_with = "deserialize_each")]
    pub deployments: Vec<Deployment>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// A unified asset split across several sub-tokens (bridge or protocol variants).
///
/// Malformed sub-tokens are dropped individually; the rest still yield pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedEntry {
    #[serde(rename = "unifiedAssetId")]
    #[serde(default)]
    pub unified_asset_id: String,

    #[serde(default)]
    pub symbol: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub icon: String,

    #[serde(rename = "groupedTokens")]
    #[serde(deserialize_with = "deserialize_each")]
    pub grouped_tokens: Vec<TokenAsset>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Detected shape of a raw token list entry, before field decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryShape {
    Grouped,
    Flat,
}

impl EntryShape {
    /// Apply the discriminant rule: a non-empty `groupedTokens` list wins,
    /// otherwise `defuseAssetId` plus `deployments` make a flat entry.
    pub fn detect(value: &Value) -> Option<EntryShape> {
        let object = value.as_object()?;

        let grouped = object
            .get("groupedTokens")
            .and_then(Value::as_array)
            .is_some_and(|tokens| !tokens.is_empty());
        if grouped {
            return Some(EntryShape::Grouped);
        }

        if object.contains_key("defuseAssetId") && object.contains_key("deployments") {
            return Some(EntryShape::Flat);
        }

        None
    }
}

/// A token list entry — grouped, flat, or unrecognized.
///
/// Unrecognized entries keep their raw JSON and are skipped by the normalizer
/// and the indexer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, from = "Value")]
pub enum TokenEntry {
    Grouped(GroupedEntry),
    Flat(TokenAsset),
    Unrecognized(Value),
}

impl TokenEntry {
    /// Classify a raw JSON entry. Never fails: anything that does not decode
    /// as its detected shape becomes [`TokenEntry::Unrecognized`].
    pub fn classify(value: Value) -> TokenEntry {
        let decoded = match EntryShape::detect(&value) {
            Some(EntryShape::Grouped) => GroupedEntry::deserialize(&value)
                .map(TokenEntry::Grouped)
                .map_err(|e| e.to_string()),
            Some(EntryShape::Flat) => TokenAsset::deserialize(&value)
                .map(TokenEntry::Flat)
                .map_err(|e| e.to_string()),
            None => Err("matches neither grouped nor flat shape".to_string()),
        };

        match decoded {
            Ok(entry) => entry,
            Err(reason) => {
                tracing::debug!(%reason, "unrecognized token list entry");
                TokenEntry::Unrecognized(value)
            }
        }
    }

    /// Entry-level symbol; for grouped entries this is the unified symbol,
    /// not a sub-token symbol.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            TokenEntry::Grouped(g) => Some(&g.symbol),
            TokenEntry::Flat(f) => Some(&f.symbol),
            TokenEntry::Unrecognized(_) => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            TokenEntry::Grouped(g) => Some(&g.name),
            TokenEntry::Flat(f) => Some(&f.name),
            TokenEntry::Unrecognized(_) => None,
        }
    }

    /// The assets carrying deployments: every sub-token of a grouped entry,
    /// the entry itself when flat, nothing when unrecognized.
    pub fn assets(&self) -> &[TokenAsset] {
        match self {
            TokenEntry::Grouped(g) => &g.grouped_tokens,
            TokenEntry::Flat(f) => std::slice::from_ref(f),
            TokenEntry::Unrecognized(_) => &[],
        }
    }

    pub fn is_grouped(&self) -> bool {
        matches!(self, TokenEntry::Grouped(_))
    }

    pub fn is_flat(&self) -> bool {
        matches!(self, TokenEntry::Flat(_))
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, TokenEntry::Unrecognized(_))
    }
}

impl From<Value> for TokenEntry {
    fn from(value: Value) -> Self {
        TokenEntry::classify(value)
    }
}
