use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::Error;

/// A live price quote as relayed by the price feed proxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    #[serde(rename = "assetId")]
    pub asset_id: String,

    pub decimals: u8,

    pub blockchain: String,

    pub symbol: String,

    /// USD price.
    pub price: f64,

    #[serde(rename = "priceUpdatedAt")]
    #[serde(with = "time::serde::rfc3339")]
    pub price_updated_at: OffsetDateTime,

    #[serde(rename = "contractAddress")]
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
}

/// Body returned by the price feed proxy: the upstream list verbatim, or `{ "error": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceFeedResponse {
    Quotes(Vec<PriceQuote>),
    Error { error: String },
}

impl PriceFeedResponse {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::PriceFeed(e.to_string()))
    }

    /// Unwrap the quote list, turning an error body into [`Error::PriceFeed`].
    pub fn into_quotes(self) -> Result<Vec<PriceQuote>, Error> {
        match self {
            PriceFeedResponse::Quotes(quotes) => Ok(quotes),
            PriceFeedResponse::Error { error } => Err(Error::PriceFeed(error)),
        }
    }
}
