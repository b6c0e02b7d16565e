//! HTTP server initialization and runtime setup.
//!
//! Handles cache setup, outbound client construction, service wiring, and
//! Axum server lifecycle.

use crate::application::services::{ConversionService, ResolverService};
use crate::config::Config;
use crate::domain::ports::ProductCatalog;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::http::{AffiliateApiClient, CachedCatalog, HttpRedirectFollower};
use crate::routes::{RateLimit, app_router};
use crate::state::AppState;
use crate::utils::tracking_link::TrackingLinkGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Connects to Redis when configured, falling back to [`NullCache`].
///
/// A Redis outage at startup never prevents the service from running;
/// conversions simply skip the cache.
pub async fn connect_cache(config: &Config) -> Arc<dyn CacheService> {
    if let Some(redis_url) = &config.redis_url {
        match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
                Arc::new(NullCache::new())
            }
        }
    } else {
        tracing::info!("Cache disabled (NullCache)");
        Arc::new(NullCache::new())
    }
}

/// Wires the conversion pipeline around an existing cache.
///
/// # Errors
///
/// Returns an error if an HTTP client cannot be built.
pub fn build_state(config: &Config, cache: Arc<dyn CacheService>) -> Result<AppState> {
    let follower = HttpRedirectFollower::new(
        Duration::from_secs(config.redirect_timeout_seconds),
        config.redirect_max_hops,
    )
    .context("Failed to build redirect client")?;

    let credentials = config.partner_credentials();
    if credentials.is_none() {
        tracing::warn!("APP_ID/APP_SECRET not set, product metadata lookups disabled");
    }

    let api_client = AffiliateApiClient::new(
        config.partner_api_url.clone(),
        credentials,
        Duration::from_secs(config.metadata_timeout_seconds),
        config.metadata_retries,
    )
    .context("Failed to build partner API client")?;

    let catalog: Arc<dyn ProductCatalog> = Arc::new(CachedCatalog::new(
        Arc::new(api_client),
        cache.clone(),
        config.cache_ttl_seconds,
    ));

    let resolver = ResolverService::new(Arc::new(follower), cache.clone(), config.cache_ttl_seconds);
    let tracking = TrackingLinkGenerator::new(config.affiliate_id.clone());
    let conversion_service = ConversionService::new(resolver, catalog.clone(), tracking);

    Ok(AppState::new(Arc::new(conversion_service), catalog, cache))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Redis cache (or NullCache fallback)
/// - Redirect follower and partner API client
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - An HTTP client cannot be built
/// - The listen address is invalid or bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let cache = connect_cache(&config).await;
    let state = build_state(&config, cache)?;

    let app = app_router(
        state,
        RateLimit {
            per_second: config.rate_limit_per_second,
            burst: config.rate_limit_burst,
        },
    );

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
