//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: The cache backend is unreachable
///
/// # Components Checked
///
/// 1. **Cache**: Redis PING (always ok when caching is disabled)
/// 2. **Partner API**: Whether credentials are configured. Missing credentials
///    are reported as `disabled` and do not degrade the service, since
///    conversions still succeed with placeholder metadata.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "cache": { "status": "ok", "message": "redis" },
///     "partner_api": { "status": "ok", "message": "Credentials configured" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let checks = HealthChecks {
        cache: check_cache(&state).await,
        partner_api: check_partner_api(&state),
    };

    let degraded = checks.cache.is_failure();

    let response = HealthResponse {
        status: if degraded { "degraded" } else { "healthy" },
        version: env!("CARGO_PKG_VERSION"),
        checks,
    };

    if degraded {
        tracing::warn!(?response, "Health check degraded");
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    } else {
        Ok(Json(response))
    }
}

async fn check_cache(state: &AppState) -> CheckStatus {
    let backend = state.cache.backend();

    if state.cache.health_check().await {
        CheckStatus::ok(backend)
    } else {
        CheckStatus::error(format!("{backend} unreachable"))
    }
}

fn check_partner_api(state: &AppState) -> CheckStatus {
    if state.catalog.is_enabled() {
        CheckStatus::ok("Credentials configured")
    } else {
        CheckStatus::disabled("APP_ID/APP_SECRET not set")
    }
}
