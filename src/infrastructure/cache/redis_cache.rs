//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info, warn};

/// Namespace shared by every key this service writes.
const KEY_PREFIX: &str = "alc:";

/// Redis cache for resolved short links and product metadata.
///
/// Uses `ConnectionManager` for connection reuse and automatic reconnects.
/// Reads and writes are fail-open: a Redis error is logged, counted, and
/// reported to the caller as a miss or a successful no-op.
pub struct RedisCache {
    connection: ConnectionManager,
    default_ttl: u64,
}

impl RedisCache {
    /// Connects to Redis and verifies the connection with a PING.
    ///
    /// `default_ttl_seconds` applies when [`CacheService::set`] is called
    /// with `ttl_seconds = None` (`CACHE_TTL_SECONDS`).
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url)
            .map_err(|e| CacheError::ConnectionError(format!("Invalid Redis URL: {}", e)))?;

        let mut connection = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e)))?;

        connection
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!(default_ttl_seconds, "✓ Connected to Redis");

        Ok(Self {
            connection,
            default_ttl: default_ttl_seconds,
        })
    }
}

/// Full Redis key for a service-level key such as `product:123`.
fn namespaced(key: &str) -> String {
    format!("{KEY_PREFIX}{key}")
}

/// Leading segment of a key (`short`, `product`), used as a metrics label.
fn key_kind(key: &str) -> &'static str {
    match key.split_once(':').map(|(kind, _)| kind) {
        Some("short") => "short",
        Some("product") => "product",
        _ => "other",
    }
}

fn record_lookup(key: &str, outcome: &'static str) {
    metrics::counter!("cache_lookups_total", "kind" => key_kind(key), "outcome" => outcome)
        .increment(1);
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.connection.clone();

        let value = match conn.get::<_, Option<String>>(namespaced(key)).await {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Redis GET failed");
                record_lookup(key, "error");
                return Ok(None);
            }
        };

        let outcome = if value.is_some() { "hit" } else { "miss" };
        debug!(key, outcome, "Cache lookup");
        record_lookup(key, outcome);

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> CacheResult<()> {
        let mut conn = self.connection.clone();
        let ttl_seconds = ttl_seconds.unwrap_or(self.default_ttl);

        if let Err(e) = conn
            .set_ex::<_, _, ()>(namespaced(key), value, ttl_seconds)
            .await
        {
            warn!(key, error = %e, "Redis SET failed");
        } else {
            debug!(key, ttl_seconds, "Cache entry stored");
        }

        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.connection.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
