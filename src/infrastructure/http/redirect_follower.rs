//! reqwest-based redirect follower for short links.

use crate::domain::ports::RedirectFollower;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, LOCATION};
use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use tracing::{debug, warn};

/// Desktop browser user agent. Some marketplace edge servers reject non-browser clients.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// Follows redirect chains with a bounded hop count and timeout.
pub struct HttpRedirectFollower {
    client: Client,
}

impl HttpRedirectFollower {
    /// Builds the follower and its HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration, max_hops: usize) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(Policy::limited(max_hops))
            .user_agent(BROWSER_USER_AGENT)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl RedirectFollower for HttpRedirectFollower {
    async fn follow(&self, url: &str) -> Option<String> {
        match self.client.get(url).send().await {
            Ok(response) => {
                let landed = landed_url(response.url(), response.status(), response.headers());
                debug!(from = url, to = %landed, status = %response.status(), "Short link followed");
                Some(landed)
            }
            Err(e) => {
                warn!(url, error = %e, "Failed to follow short link");
                None
            }
        }
    }
}

/// Picks the destination from the last response of a redirect chain.
///
/// When the client stopped on a 3xx response that still carries a
/// `Location` header, that header (resolved against the response URL) is the
/// destination. Otherwise the response URL is.
fn landed_url(final_url: &Url, status: StatusCode, headers: &HeaderMap) -> String {
    if status.is_redirection()
        && let Some(target) = headers
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|location| final_url.join(location).ok())
    {
        return target.to_string();
    }

    final_url.to_string()
}
