//! Port for following HTTP redirect chains.

use async_trait::async_trait;

/// Follows a link's redirect chain to the page it finally lands on.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpRedirectFollower`] - reqwest-based follower
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectFollower: Send + Sync {
    /// Returns the landed URL, or `None` if the chain could not be followed
    /// (network error, timeout, too many redirects).
    async fn follow(&self, url: &str) -> Option<String>;
}
