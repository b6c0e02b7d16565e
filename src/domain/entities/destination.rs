//! Resolved link destinations.

use std::fmt;

/// How a [`ResolvedDestination`] was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Decoded from a wrapper link's `origin_link` parameter.
    Unwrapped,
    /// Obtained by following a short link's redirect chain.
    Followed,
    /// Served from the short-link cache.
    Cached,
    /// The input was already a destination link.
    Passthrough,
    /// Following a short link failed; the input is used unchanged.
    Degraded,
}

impl Resolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unwrapped => "unwrapped",
            Self::Followed => "followed",
            Self::Cached => "cached",
            Self::Passthrough => "passthrough",
            Self::Degraded => "degraded",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The true destination of a pasted link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDestination {
    pub url: String,
    pub resolution: Resolution,
}

impl ResolvedDestination {
    pub fn new(url: impl Into<String>, resolution: Resolution) -> Self {
        Self {
            url: url.into(),
            resolution,
        }
    }
}
