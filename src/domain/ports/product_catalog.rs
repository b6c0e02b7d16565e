//! Port for product metadata lookups.

use crate::domain::entities::ProductInfo;
use async_trait::async_trait;

/// Looks up display metadata for a marketplace item.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::AffiliateApiClient`] - Partner GraphQL API
/// - [`crate::infrastructure::http::CachedCatalog`] - Cache decorator over any catalog
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Returns metadata for `item_id`, or `None` on any failure or empty result.
    async fn lookup(&self, item_id: &str) -> Option<ProductInfo>;

    /// Whether lookups can succeed at all (e.g. credentials are configured).
    fn is_enabled(&self) -> bool {
        true
    }
}
