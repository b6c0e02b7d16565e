//! Port traits for the network-facing collaborators of the pipeline.
//!
//! The application layer depends only on these traits. Concrete adapters
//! live in `crate::infrastructure::http`; mock implementations are generated
//! via `mockall` for unit tests.
//!
//! Both ports are best-effort: failures are expressed as `None` in the
//! return type instead of errors, so a broken link or a failed lookup never
//! aborts a conversion batch.
//!
//! - [`RedirectFollower`] - Follows a short link's redirect chain
//! - [`ProductCatalog`] - Looks up display metadata by item id

pub mod product_catalog;
pub mod redirect_follower;

pub use product_catalog::ProductCatalog;
pub use redirect_follower::RedirectFollower;

#[cfg(test)]
pub use product_catalog::MockProductCatalog;
#[cfg(test)]
pub use redirect_follower::MockRedirectFollower;
