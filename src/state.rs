//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ConversionService;
use crate::domain::ports::ProductCatalog;
use crate::infrastructure::cache::CacheService;

/// Handles shared by all requests. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub conversion_service: Arc<ConversionService>,
    pub catalog: Arc<dyn ProductCatalog>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    pub fn new(
        conversion_service: Arc<ConversionService>,
        catalog: Arc<dyn ProductCatalog>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            conversion_service,
            catalog,
            cache,
        }
    }
}
