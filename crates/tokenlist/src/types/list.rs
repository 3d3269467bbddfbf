use serde::{Deserialize, Serialize};

use super::entry::TokenEntry;

/// Top-level token list document: `{ "$schema"?, "tokens"? }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenList {
    #[serde(rename = "$schema")]
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Absent `tokens` is an empty list.
    #[serde(default)]
    pub tokens: Vec<TokenEntry>,
}

impl TokenList {
    /// Parse a token list from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse a token list from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Serialize the token list to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of entries that will be skipped by the normalizer.
    pub fn unrecognized_count(&self) -> usize {
        self.tokens.iter().filter(|e| !e.is_recognized()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_tokens_is_empty() {
        let list = TokenList::from_json(r#"{ "$schema": "./tokenlist.schema.json" }"#).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.schema.as_deref(), Some("./tokenlist.schema.json"));
    }

    #[test]
    fn test_mixed_entries_parse() {
        let json = r#"{
            "tokens": [
                { "bogus": true },
                {
                    "defuseAssetId": "nep141:wrap.near",
                    "symbol": "wNEAR",
                    "name": "Wrapped NEAR",
                    "decimals": 24,
                    "icon": "",
                    "originChainName": "near",
                    "deployments": []
                }
            ]
        }"#;
        let list = TokenList::from_json(json).unwrap();
        assert_eq!(list.tokens.len(), 2);
        assert_eq!(list.unrecognized_count(), 1);
        assert!(list.tokens[1].is_flat());
    }

    #[test]
    fn test_non_object_document_is_error() {
        assert!(TokenList::from_json("42").is_err());
    }

    #[test]
    fn test_to_json_drops_malformed_pieces() {
        let json = r#"{
            "tokens": [
                {
                    "defuseAssetId": "nep141:wrap.near",
                    "symbol": "wNEAR",
                    "name": "Wrapped NEAR",
                    "decimals": 24,
                    "originChainName": "near",
                    "deployments": [
                        { "chainName": "near", "decimals": 24, "bridge": "direct", "address": "wrap.near" },
                        { "chainName": "near" }
                    ]
                }
            ]
        }"#;
        let list = TokenList::from_json(json).unwrap();
        let written = list.to_json().unwrap();
        assert!(!written.contains("$schema"));

        let reparsed = TokenList::from_json(&written).unwrap();
        assert_eq!(reparsed, list);
        assert_eq!(reparsed.tokens[0].assets()[0].deployments.len(), 1);
    }
}
