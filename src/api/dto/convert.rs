//! DTOs for the text conversion endpoint.

use crate::domain::entities::ConversionResult;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to convert every marketplace link found in `text`.
///
/// A missing `text` field deserializes to an empty string so both cases are
/// reported by the same validation error.
#[derive(Debug, Deserialize, Validate)]
pub struct ConvertRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Text must not be empty"))]
    pub text: String,

    /// Sub-identifiers joined with `-` into the tracking link's `sub_id`.
    #[serde(default, rename = "subIds")]
    pub sub_ids: Vec<String>,
}

/// Conversion outcome for the whole input text.
///
/// `details` is omitted when no marketplace links were found.
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub success: bool,
    pub converted: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ConversionDetail>>,
}

impl ConvertResponse {
    pub fn from_results(results: Vec<ConversionResult>) -> Self {
        if results.is_empty() {
            return Self {
                success: false,
                converted: 0,
                details: None,
            };
        }

        let details: Vec<ConversionDetail> = results.into_iter().map(Into::into).collect();

        Self {
            success: true,
            converted: details.len(),
            details: Some(details),
        }
    }
}

/// One converted link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionDetail {
    pub original: String,
    /// Tracking link.
    pub short: String,
    pub product_name: String,
    pub image_url: String,
}

impl From<ConversionResult> for ConversionDetail {
    fn from(result: ConversionResult) -> Self {
        Self {
            original: result.original,
            short: result.tracking_link,
            product_name: result.product_name,
            image_url: result.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_accepts_missing_sub_ids() {
        let request: ConvertRequest = serde_json::from_value(json!({ "text": "hi" })).unwrap();
        assert!(request.sub_ids.is_empty());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_missing_text_fails_validation() {
        let request: ConvertRequest =
            serde_json::from_value(json!({ "subIds": ["a"] })).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_response_shape() {
        let body = serde_json::to_value(ConvertResponse::from_results(vec![])).unwrap();
        assert_eq!(body, json!({ "success": false, "converted": 0 }));
    }

    #[test]
    fn test_detail_field_names() {
        let detail = ConversionDetail::from(ConversionResult {
            original: "shp.ee/x".to_string(),
            tracking_link: "https://s.shopee.vn/an_redir?origin_link=x".to_string(),
            product_name: "Name".to_string(),
            image_url: String::new(),
        });

        let body = serde_json::to_value(detail).unwrap();
        assert_eq!(
            body,
            json!({
                "original": "shp.ee/x",
                "short": "https://s.shopee.vn/an_redir?origin_link=x",
                "productName": "Name",
                "imageUrl": ""
            })
        );
    }
}
