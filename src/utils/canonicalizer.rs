//! Product identity extraction and canonical URL derivation.
//!
//! The marketplace exposes the same product under several path shapes
//! (`/Name-i.<shop>.<item>`, `/product/<shop>/<item>`,
//! `/<shop-slug>/<shop>/<item>`, `?itemId=<item>`). This module derives a
//! stable item id and a single canonical URL from any of them.

use regex::Regex;
use std::sync::LazyLock;

/// One entry of the ordered identifier rule table.
struct IdRule {
    name: &'static str,
    pattern: Regex,
    /// Capture group holding the item id.
    group: usize,
}

/// Identifier rules in priority order. The first matching rule wins.
static ID_RULES: LazyLock<Vec<IdRule>> = LazyLock::new(|| {
    vec![
        IdRule {
            name: "dash_i",
            pattern: Regex::new(r"-i\.(\d+)\.(\d+)").unwrap(),
            group: 2,
        },
        IdRule {
            name: "product_path",
            pattern: Regex::new(r"/product/\d+/(\d+)").unwrap(),
            group: 1,
        },
        IdRule {
            name: "generic_id",
            pattern: Regex::new(r"(?:itemId=|/product/)(\d+)").unwrap(),
            group: 1,
        },
        IdRule {
            name: "last_numeric_segment",
            pattern: Regex::new(r"/(\d+)(?:\?|$)").unwrap(),
            group: 1,
        },
    ]
});

/// `<scheme>://[www.]shopee.vn/{slug-or-id}/{shopId}/{itemId}`, with anything after the item digits ignored.
static SHOP_ITEM_PATH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://(?:www\.)?shopee\.vn/([^/]+)/(\d+)/(\d+)").unwrap()
});

const CANONICAL_PRODUCT_BASE: &str = "https://shopee.vn/product";

/// Canonical identity of a marketplace product link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalProduct {
    /// Destination URL without query noise, in `/product/{shop}/{item}` shape when detectable.
    pub canonical_url: String,
    /// Numeric item id, or `None` when no rule matched.
    pub item_id: Option<String>,
}

/// Derives the canonical URL and item id for a resolved destination URL.
///
/// Never fails: a URL without a recognizable id yields `item_id: None`.
///
/// # Examples
///
/// ```ignore
/// let product = canonicalize("https://shopee.vn/some-name/111/222?foo=bar");
/// assert_eq!(product.canonical_url, "https://shopee.vn/product/111/222");
/// assert_eq!(product.item_id.as_deref(), Some("222"));
/// ```
pub fn canonicalize(destination: &str) -> CanonicalProduct {
    CanonicalProduct {
        canonical_url: canonical_url(destination),
        item_id: extract_item_id(destination),
    }
}

/// Applies the identifier rules in priority order and returns the first hit.
pub fn extract_item_id(url: &str) -> Option<String> {
    ID_RULES.iter().find_map(|rule| {
        let id = rule.pattern.captures(url)?.get(rule.group)?.as_str();
        tracing::trace!(rule = rule.name, item_id = id, "Item id matched");
        Some(id.to_string())
    })
}

/// Strips the query string and fragment, then normalizes the three-part shop/item path.
pub fn canonical_url(url: &str) -> String {
    let base = url
        .split_once(['?', '#'])
        .map_or(url, |(before, _)| before);

    match SHOP_ITEM_PATH_REGEX.captures(base) {
        Some(caps) => format!("{}/{}/{}", CANONICAL_PRODUCT_BASE, &caps[2], &caps[3]),
        None => base.to_string(),
    }
}
