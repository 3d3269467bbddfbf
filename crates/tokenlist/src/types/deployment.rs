use serde::{Deserialize, Deserializer, Serialize};

/// Whether a deployment is the chain's intrinsic currency or a contract token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentKind {
    Native,
    #[default]
    Contract,
}

impl DeploymentKind {
    pub fn is_native(&self) -> bool {
        matches!(self, DeploymentKind::Native)
    }
}

/// A single chain-specific instantiation of a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    #[serde(rename = "chainName")]
    pub chain_name: String,

    pub decimals: u8,

    pub bridge: String,

    /// Contract address; absent for native assets.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Inferred from the optional `type` field; only `"native"` is meaningful.
    #[serde(rename = "type")]
    #[serde(default, deserialize_with = "deserialize_kind")]
    pub kind: DeploymentKind,

    /// Chain-specific auxiliary asset code (e.g. a Stellar asset code).
    #[serde(rename = "stellarCode")]
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_code: Option<String>,
}

impl Deployment {
    /// The contract address, ignored for native deployments.
    pub fn contract_address(&self) -> Option<&str> {
        if self.kind.is_native() {
            None
        } else {
            self.address.as_deref()
        }
    }
}

/// Any `type` value other than `"native"` (including `null`) means a contract deployment.
fn deserialize_kind<'de, D>(deserializer: D) -> Result<DeploymentKind, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(match raw.as_deref() {
        Some("native") => DeploymentKind::Native,
        _ => DeploymentKind::Contract,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_type_ignores_address() {
        let json = r#"{
            "chainName": "ethereum",
            "decimals": 18,
            "bridge": "poa",
            "type": "native",
            "address": "0xeeee"
        }"#;
        let deployment: Deployment = serde_json::from_str(json).unwrap();
        assert_eq!(deployment.kind, DeploymentKind::Native);
        assert_eq!(deployment.contract_address(), None);
    }

    #[test]
    fn test_missing_optionals_default_to_contract() {
        let json = r#"{ "chainName": "near", "decimals": 6, "bridge": "poa" }"#;
        let deployment: Deployment = serde_json::from_str(json).unwrap();
        assert_eq!(deployment.kind, DeploymentKind::Contract);
        assert!(deployment.address.is_none());
        assert!(deployment.origin_code.is_none());
    }

    #[test]
    fn test_unknown_type_is_contract() {
        let json = r#"{
            "chainName": "stellar",
            "decimals": 7,
            "bridge": "poa",
            "type": "asset",
            "address": "GA5Z",
            "stellarCode": "USDC"
        }"#;
        let deployment: Deployment = serde_json::from_str(json).unwrap();
        assert_eq!(deployment.kind, DeploymentKind::Contract);
        assert_eq!(deployment.contract_address(), Some("GA5Z"));
        assert_eq!(deployment.origin_code.as_deref(), Some("USDC"));
    }

    #[test]
    fn test_missing_decimals_is_rejected() {
        let json = r#"{ "chainName": "near", "bridge": "poa" }"#;
        assert!(serde_json::from_str::<Deployment>(json).is_err());
    }
}
