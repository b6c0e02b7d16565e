//! Product display metadata.

use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder name used when no metadata is available for a link.
pub const DEFAULT_PRODUCT_NAME: &str = "Sản phẩm Shopee";

/// Display metadata for a product, as returned by the partner API.
///
/// Field names follow the partner's GraphQL schema so the same type is used
/// for decoding responses and for cache entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub product_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_url: String,
}

/// Decodes an explicit JSON `null` the same way as a missing field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ProductInfo {
    pub fn new(product_name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            image_url: image_url.into(),
        }
    }
}
