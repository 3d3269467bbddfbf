use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a JSON list item by item, dropping the items that do not decode.
///
/// The field itself must still be a list.
pub fn deserialize_each<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw: Vec<Value> = Vec::deserialize(deserializer)?;
    let total = raw.len();

    let items: Vec<T> = raw
        .iter()
        .filter_map(|value| match T::deserialize(value) {
            Ok(item) => Some(item),
            Err(err) => {
                tracing::debug!(%err, "skipping malformed list item");
                None
            }
        })
        .collect();

    if items.len() < total {
        tracing::debug!(kept = items.len(), total, "dropped malformed items");
    }
    Ok(items)
}
