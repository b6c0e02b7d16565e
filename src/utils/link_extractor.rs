//! Marketplace link extraction from free-form text.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Matches links on the marketplace domain and its short-link domains.
///
/// The scheme and `www.` prefix are optional; a match runs until the first
/// whitespace character.
static MARKETPLACE_LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:https?://)?(?:www\.)?(?:shopee\.vn|vn\.shp\.ee|shp\.ee|s\.shopee\.vn|s\.shope\.ee)\S*",
    )
    .unwrap()
});

/// Scheme prepended to candidates that were pasted without one.
const DEFAULT_SCHEME: &str = "https://";

/// Extracts unique marketplace links from `text`.
///
/// Duplicates (byte-identical matches) are collapsed and the first-seen
/// order is preserved. Text without any marketplace link yields an empty
/// vector.
///
/// # Examples
///
/// ```ignore
/// let links = extract_links("see shopee.vn/product/1/2 and shopee.vn/product/1/2");
/// assert_eq!(links, vec!["shopee.vn/product/1/2"]);
/// ```
pub fn extract_links(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    MARKETPLACE_LINK_REGEX
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|link| seen.insert(*link))
        .map(str::to_string)
        .collect()
}

/// Returns `link` with an `https://` scheme when it has none.
pub fn ensure_scheme(link: &str) -> String {
    let lower = link.get(..8).unwrap_or(link).to_ascii_lowercase();

    if lower.starts_with("http://") || lower.starts_with("https://") {
        link.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{link}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_no_links() {
        assert!(extract_links("nothing to see here, example.com/product/1/2").is_empty());
        assert!(extract_links("").is_empty());
    }

    #[test]
    fn test_extract_bare_domain_link() {
        let links = extract_links("check this out shopee.vn/product/111/222 thanks");
        assert_eq!(links, vec!["shopee.vn/product/111/222"]);
    }

    #[test]
    fn test_extract_with_scheme_and_www() {
        let links = extract_links("go https://www.shopee.vn/abc-i.1.2?sp=1 now");
        assert_eq!(links, vec!["https://www.shopee.vn/abc-i.1.2?sp=1"]);
    }

    #[test]
    fn test_extract_short_link_domains() {
        let text = "a https://s.shopee.vn/8KjrdNEQJq b shp.ee/xyz c vn.shp.ee/q d s.shope.ee/z";
        let links = extract_links(text);
        assert_eq!(
            links,
            vec![
                "https://s.shopee.vn/8KjrdNEQJq",
                "shp.ee/xyz",
                "vn.shp.ee/q",
                "s.shope.ee/z",
            ]
        );
    }

    #[test]
    fn test_extract_case_insensitive() {
        let links = extract_links("HTTPS://SHOPEE.VN/Product/1/2");
        assert_eq!(links, vec!["HTTPS://SHOPEE.VN/Product/1/2"]);
    }

    #[test]
    fn test_extract_stops_at_whitespace() {
        let links = extract_links("shopee.vn/a-i.1.2\tshopee.vn/b-i.3.4\nshopee.vn/c-i.5.6");
        assert_eq!(
            links,
            vec!["shopee.vn/a-i.1.2", "shopee.vn/b-i.3.4", "shopee.vn/c-i.5.6"]
        );
    }

    #[test]
    fn test_extract_deduplicates_preserving_order() {
        let text = "shopee.vn/product/1/2 shp.ee/abc shopee.vn/product/1/2 shp.ee/abc";
        let links = extract_links(text);
        assert_eq!(links, vec!["shopee.vn/product/1/2", "shp.ee/abc"]);
    }

    #[test]
    fn test_extract_distinct_spellings_are_kept() {
        let links = extract_links("shopee.vn/product/1/2 https://shopee.vn/product/1/2");
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn test_ensure_scheme_adds_https() {
        assert_eq!(
            ensure_scheme("shopee.vn/product/1/2"),
            "https://shopee.vn/product/1/2"
        );
    }

    #[test]
    fn test_ensure_scheme_keeps_existing() {
        assert_eq!(ensure_scheme("http://shp.ee/x"), "http://shp.ee/x");
        assert_eq!(ensure_scheme("https://shp.ee/x"), "https://shp.ee/x");
        assert_eq!(ensure_scheme("HTTPS://shp.ee/x"), "HTTPS://shp.ee/x");
    }

    #[test]
    fn test_ensure_scheme_short_input() {
        assert_eq!(ensure_scheme("shp.ee"), "https://shp.ee");
    }
}
