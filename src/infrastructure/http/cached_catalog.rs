//! Cache decorator for product metadata lookups.

use crate::domain::entities::ProductInfo;
use crate::domain::ports::ProductCatalog;
use crate::infrastructure::cache::{CacheService, product_key};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Serves product metadata from a [`CacheService`] and falls back to an inner catalog.
///
/// Only successful lookups are cached, so a transient partner outage is
/// retried on the next conversion instead of being pinned for a full TTL.
pub struct CachedCatalog {
    inner: Arc<dyn ProductCatalog>,
    cache: Arc<dyn CacheService>,
    ttl_seconds: u64,
}

impl CachedCatalog {
    pub fn new(
        inner: Arc<dyn ProductCatalog>,
        cache: Arc<dyn CacheService>,
        ttl_seconds: u64,
    ) -> Self {
        Self {
            inner,
            cache,
            ttl_seconds,
        }
    }

    async fn cached(&self, key: &str) -> Option<ProductInfo> {
        let raw = match self.cache.get(key).await {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(key, error = %e, "Cache read failed");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(info) => Some(info),
            Err(e) => {
                warn!(key, error = %e, "Discarding malformed cache entry");
                None
            }
        }
    }
}

#[async_trait]
impl ProductCatalog for CachedCatalog {
    async fn lookup(&self, item_id: &str) -> Option<ProductInfo> {
        let key = product_key(item_id);

        if let Some(info) = self.cached(&key).await {
            debug!(item_id, "Product metadata served from cache");
            return Some(info);
        }

        let info = self.inner.lookup(item_id).await?;

        match serde_json::to_string(&info) {
            Ok(raw) => {
                if let Err(e) = self.cache.set(&key, &raw, Some(self.ttl_seconds)).await {
                    warn!(key, error = %e, "Cache write failed");
                }
            }
            Err(e) => warn!(key, error = %e, "Failed to encode product metadata"),
        }

        Some(info)
    }

    fn is_enabled(&self) -> bool {
        self.inner.is_enabled()
    }
}
