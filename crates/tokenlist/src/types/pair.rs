use serde::{Deserialize, Serialize};

use super::deployment::{Deployment, DeploymentKind};
use super::entry::TokenAsset;

/// One supported (token, chain) combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupportPair {
    pub symbol: String,

    pub name: String,

    #[serde(rename = "chainName")]
    pub chain_name: String,

    #[serde(rename = "assetId")]
    pub asset_id: String,

    pub decimals: u8,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    pub kind: DeploymentKind,

    pub bridge: String,

    #[serde(rename = "originChainName")]
    pub origin_chain_name: String,
}

impl SupportPair {
    /// Build a pair from an asset's identity and one of its deployments.
    pub fn new(asset: &TokenAsset, deployment: &Deployment) -> Self {
        Self {
            symbol: asset.symbol.clone(),
            name: asset.name.clone(),
            chain_name: deployment.chain_name.clone(),
            asset_id: asset.asset_id.clone(),
            decimals: deployment.decimals,
            address: deployment.contract_address().map(str::to_string),
            kind: deployment.kind,
            bridge: deployment.bridge.clone(),
            origin_chain_name: asset.origin_chain_name.clone(),
        }
    }

    pub fn is_native(&self) -> bool {
        self.kind.is_native()
    }

    /// Text for the address column: `native`, the address, or a dash when unknown.
    pub fn address_label(&self) -> &str {
        if self.is_native() {
            return "native";
        }
        match self.address.as_deref() {
            Some(address) if !address.is_empty() => address,
            _ => "—",
        }
    }
}
