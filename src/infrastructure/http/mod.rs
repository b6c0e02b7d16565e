//! Outbound HTTP adapters.
//!
//! - [`HttpRedirectFollower`] - Follows short-link redirect chains with reqwest
//! - [`AffiliateApiClient`] - Signed GraphQL lookups against the partner API
//! - [`CachedCatalog`] - Cache decorator for any [`crate::domain::ports::ProductCatalog`]

mod affiliate_client;
mod cached_catalog;
mod redirect_follower;

pub use affiliate_client::{
    AffiliateApiClient, CatalogError, DEFAULT_PARTNER_API_URL, PartnerCredentials,
};
pub use cached_catalog::CachedCatalog;
pub use redirect_follower::{BROWSER_USER_AGENT, HttpRedirectFollower};
