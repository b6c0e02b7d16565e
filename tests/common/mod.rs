#![allow(dead_code)]

use affiliate_link_converter::application::services::{ConversionService, ResolverService};
use affiliate_link_converter::domain::entities::ProductInfo;
use affiliate_link_converter::domain::ports::{ProductCatalog, RedirectFollower};
use affiliate_link_converter::infrastructure::cache::{
    CacheError, CacheResult, CacheService, NullCache,
};
use affiliate_link_converter::state::AppState;
use affiliate_link_converter::utils::tracking_link::TrackingLinkGenerator;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

pub const TEST_AFFILIATE_ID: &str = "17335300037";

/// Redirect follower backed by a fixed table; unknown links fail.
#[derive(Default)]
pub struct FakeFollower {
    routes: HashMap<String, String>,
}

impl FakeFollower {
    pub fn with_route(mut self, from: &str, to: &str) -> Self {
        self.routes.insert(from.to_string(), to.to_string());
        self
    }
}

#[async_trait]
impl RedirectFollower for FakeFollower {
    async fn follow(&self, url: &str) -> Option<String> {
        self.routes.get(url).cloned()
    }
}

/// Product catalog backed by a fixed table; unknown items fail.
pub struct FakeCatalog {
    products: HashMap<String, ProductInfo>,
    enabled: bool,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self {
            products: HashMap::new(),
            enabled: true,
        }
    }

    pub fn disabled() -> Self {
        Self {
            products: HashMap::new(),
            enabled: false,
        }
    }

    pub fn with_product(mut self, item_id: &str, name: &str, image_url: &str) -> Self {
        self.products
            .insert(item_id.to_string(), ProductInfo::new(name, image_url));
        self
    }
}

#[async_trait]
impl ProductCatalog for FakeCatalog {
    async fn lookup(&self, item_id: &str) -> Option<ProductInfo> {
        if !self.enabled {
            return None;
        }
        self.products.get(item_id).cloned()
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Cache whose backend is always unreachable.
pub struct UnreachableCache;

#[async_trait]
impl CacheService for UnreachableCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<String>> {
        Err(CacheError::ConnectionError("unreachable".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str, _ttl_seconds: Option<u64>) -> CacheResult<()> {
        Err(CacheError::ConnectionError("unreachable".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

pub fn create_state(
    follower: FakeFollower,
    catalog: FakeCatalog,
    cache: Arc<dyn CacheService>,
) -> AppState {
    let catalog: Arc<dyn ProductCatalog> = Arc::new(catalog);
    let resolver = ResolverService::new(Arc::new(follower), cache.clone(), 3600);
    let conversion_service = ConversionService::new(
        resolver,
        catalog.clone(),
        TrackingLinkGenerator::new(TEST_AFFILIATE_ID),
    );

    AppState::new(Arc::new(conversion_service), catalog, cache)
}

pub fn create_test_state(follower: FakeFollower, catalog: FakeCatalog) -> AppState {
    create_state(follower, catalog, Arc::new(NullCache::new()))
}
