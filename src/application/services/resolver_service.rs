//! Link resolution: wrapper unwrapping, short-link following, passthrough.

use std::sync::Arc;

use crate::domain::entities::{Resolution, ResolvedDestination};
use crate::domain::ports::RedirectFollower;
use crate::infrastructure::cache::{CacheService, short_link_key};
use tracing::{debug, warn};
use url::Url;

/// Query parameter carrying the true destination of a wrapper link.
pub const WRAPPED_DESTINATION_PARAM: &str = "origin_link";

/// Hosts that only issue redirects to the real destination.
pub const SHORT_LINK_HOSTS: [&str; 4] = ["s.shopee.vn", "shp.ee", "s.shope.ee", "vn.shp.ee"];

/// Nesting limit for wrapper links whose destination is itself a wrapper.
const MAX_UNWRAP_DEPTH: usize = 5;

/// Resolves pasted links to their true destination.
///
/// Resolution is best-effort and never fails: when a short link cannot be
/// followed, the input link itself is returned with [`Resolution::Degraded`].
pub struct ResolverService {
    follower: Arc<dyn RedirectFollower>,
    cache: Arc<dyn CacheService>,
    cache_ttl_seconds: u64,
}

impl ResolverService {
    /// Creates a new resolver.
    pub fn new(
        follower: Arc<dyn RedirectFollower>,
        cache: Arc<dyn CacheService>,
        cache_ttl_seconds: u64,
    ) -> Self {
        Self {
            follower,
            cache,
            cache_ttl_seconds,
        }
    }

    /// Resolves a scheme-qualified link.
    ///
    /// # Resolution Order
    ///
    /// 1. **Wrapper**: an `origin_link` query parameter is decoded and returned
    ///    without any network call, unless it is itself a short link
    /// 2. **Short link**: links on [`SHORT_LINK_HOSTS`] are followed over HTTP
    ///    (cached per link)
    /// 3. **Passthrough**: anything else is already a destination
    pub async fn resolve(&self, link: &str) -> ResolvedDestination {
        let destination = match unwrap_destination(link) {
            Some(unwrapped) if is_short_link(&unwrapped) => {
                self.follow_short_link(&unwrapped).await
            }
            Some(unwrapped) => ResolvedDestination::new(unwrapped, Resolution::Unwrapped),
            None if is_short_link(link) => self.follow_short_link(link).await,
            None => ResolvedDestination::new(link, Resolution::Passthrough),
        };

        metrics::counter!("link_resolutions_total", "resolution" => destination.resolution.as_str())
            .increment(1);
        debug!(link, destination = %destination.url, resolution = %destination.resolution, "Link resolved");

        destination
    }

    async fn follow_short_link(&self, link: &str) -> ResolvedDestination {
        let key = short_link_key(link);

        match self.cache.get(&key).await {
            Ok(Some(cached)) => return ResolvedDestination::new(cached, Resolution::Cached),
            Ok(None) => {}
            Err(e) => warn!(link, error = %e, "Short link cache read failed"),
        }

        let Some(landed) = self.follower.follow(link).await else {
            warn!(link, "Short link could not be followed, using it unresolved");
            return ResolvedDestination::new(link, Resolution::Degraded);
        };

        // Landing pages sometimes carry the product behind another wrapper.
        let destination = unwrap_destination(&landed).unwrap_or(landed);

        if destination != link
            && let Err(e) = self
                .cache
                .set(&key, &destination, Some(self.cache_ttl_seconds))
                .await
        {
            warn!(link, error = %e, "Short link cache write failed");
        }

        ResolvedDestination::new(destination, Resolution::Followed)
    }
}

/// Returns the decoded `origin_link` value of a wrapper link.
///
/// Returns `None` for unparsable links and for links without a non-empty
/// `origin_link` parameter.
pub fn wrapped_destination(link: &str) -> Option<String> {
    let url = Url::parse(link).ok()?;

    url.query_pairs()
        .find(|(name, _)| name == WRAPPED_DESTINATION_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Unwraps nested wrapper links down to the innermost destination.
///
/// Returns `None` if `link` is not a wrapper link.
pub fn unwrap_destination(link: &str) -> Option<String> {
    let mut destination = wrapped_destination(link)?;

    for _ in 1..MAX_UNWRAP_DEPTH {
        match wrapped_destination(&destination) {
            Some(inner) => destination = inner,
            None => break,
        }
    }

    Some(destination)
}

/// Whether `link` points at one of the [`SHORT_LINK_HOSTS`].
pub fn is_short_link(link: &str) -> bool {
    Url::parse(link)
        .ok()
        .and_then(|url| url.host_str().map(str::to_ascii_lowercase))
        .is_some_and(|host| SHORT_LINK_HOSTS.contains(&host.as_str()))
}
