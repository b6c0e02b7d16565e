//! Handler for the text conversion endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::convert::{ConvertRequest, ConvertResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Converts every marketplace link found in a block of text.
///
/// # Endpoint
///
/// `POST /api/convert-text`
///
/// # Batch Processing
///
/// Each unique link is resolved, canonicalized and enriched independently.
/// A link whose short URL cannot be followed or whose metadata lookup fails
/// still appears in the response with placeholder metadata.
///
/// # Request Body
///
/// ```json
/// {
///   "text": "check this out shopee.vn/product/111/222 thanks",
///   "subIds": ["camp1"]
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "converted": 1,
///   "details": [
///     {
///       "original": "shopee.vn/product/111/222",
///       "short": "https://s.shopee.vn/an_redir?origin_link=https%3A%2F%2Fshopee.vn%2Fproduct%2F111%2F222&affiliate_id=17335300037&sub_id=camp1",
///       "productName": "Sản phẩm Shopee",
///       "imageUrl": ""
///     }
///   ]
/// }
/// ```
///
/// Text without marketplace links returns `{ "success": false, "converted": 0 }`.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON or `text` is missing or empty.
pub async fn convert_text_handler(
    State(state): State<AppState>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> Result<Json<ConvertResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let results = state
        .conversion_service
        .convert_text(&payload.text, &payload.sub_ids)
        .await;

    Ok(Json(ConvertResponse::from_results(results)))
}
