//! Wire representation of a submitted receipt
//!
//! Every field is string-typed and defaults to empty when the key is absent
//! or `null`, so that missing data is reported by [`crate::ReceiptValidator`] with a
//! field-specific message rather than by the JSON decoder.

use serde::{Deserialize, Deserializer, Serialize};

/// Decode `null` as the type's empty value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Receipt as submitted by clients
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiptWire {
    /// Retailer or store name
    #[serde(deserialize_with = "null_as_default")]
    pub retailer: String,

    /// Total amount paid, as a decimal string (e.g. "35.35")
    #[serde(deserialize_with = "null_as_default")]
    pub total: String,

    /// Purchase date, `YYYY-MM-DD`
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_date: String,

    /// Purchase time, 24-hour `HH:MM`
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_time: String,

    /// Purchased items, in receipt order
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<ItemWire>,
}

/// Line item as submitted by clients
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemWire {
    #[serde(deserialize_with = "null_as_default")]
    pub short_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: String,
}

impl ItemWire {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}
