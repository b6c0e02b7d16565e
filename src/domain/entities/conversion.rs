//! Conversion result entity.

use super::product::{DEFAULT_PRODUCT_NAME, ProductInfo};

/// A single converted link.
///
/// Built once per unique input link; missing metadata is replaced with
/// [`DEFAULT_PRODUCT_NAME`] and an empty image URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    /// The link exactly as it appeared in the input text.
    pub original: String,
    /// Affiliate redirect link built from the canonical URL.
    pub tracking_link: String,
    pub product_name: String,
    pub image_url: String,
}

impl ConversionResult {
    /// Assembles a result, substituting defaults for absent or blank metadata.
    pub fn new(original: String, tracking_link: String, info: Option<ProductInfo>) -> Self {
        let (product_name, image_url) = match info {
            Some(info) => (info.product_name, info.image_url),
            None => (String::new(), String::new()),
        };

        let product_name = if product_name.trim().is_empty() {
            DEFAULT_PRODUCT_NAME.to_string()
        } else {
            product_name
        };

        Self {
            original,
            tracking_link,
            product_name,
            image_url,
        }
    }
}
