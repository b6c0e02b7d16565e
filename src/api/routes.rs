//! API route configuration.

use crate::api::handlers::convert_text_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Public API routes.
///
/// # Endpoints
///
/// - `POST /convert-text` - Convert marketplace links found in free-form text
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/convert-text", post(convert_text_handler))
}
