//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::{GovernorConfig, GovernorConfigBuilder},
    key_extractor::PeerIpKeyExtractor,
};

/// Creates a per-IP rate limiter for the conversion API.
///
/// # Limits
///
/// - **Rate**: one token replenished every `per_second` seconds
///   (`RATE_LIMIT_PER_SECOND`, default 2)
/// - **Burst**: `burst` requests (`RATE_LIMIT_BURST`, default 100)
///
/// Requests exceeding the limit receive `429 Too Many Requests`. Zero values
/// are rejected by [`crate::config::Config::validate`]; if they slip through,
/// the governor defaults apply.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/convert-text", post(convert_text_handler))
///     .layer(rate_limit::layer(2, 100));
/// ```
pub fn layer(
    per_second: u64,
    burst: u32,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(per_second)
        .burst_size(burst)
        .finish()
        .unwrap_or_else(|| {
            tracing::warn!(per_second, burst, "Invalid rate limit, using defaults");
            GovernorConfig::default()
        });

    GovernorLayer::new(Arc::new(governor_conf))
}
