//! Affiliate tracking link generation.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Redirect service prefix that carries the destination in `origin_link`.
pub const REDIRECT_PREFIX: &str = "https://s.shopee.vn/an_redir";

/// Characters escaped by JavaScript's `encodeURIComponent`.
///
/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is percent-encoded.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds tracking links for a fixed affiliate id.
#[derive(Debug, Clone)]
pub struct TrackingLinkGenerator {
    affiliate_id: String,
}

impl TrackingLinkGenerator {
    pub fn new(affiliate_id: impl Into<String>) -> Self {
        Self {
            affiliate_id: affiliate_id.into(),
        }
    }

    /// Wraps `canonical_url` into a redirect-service link.
    ///
    /// `sub_ids` are joined with `-`; an empty list produces an empty `sub_id`.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let generator = TrackingLinkGenerator::new("17335300037");
    /// let link = generator.generate("https://shopee.vn/product/1/2", &["camp1".into()]);
    /// assert_eq!(
    ///     link,
    ///     "https://s.shopee.vn/an_redir?origin_link=https%3A%2F%2Fshopee.vn%2Fproduct%2F1%2F2&affiliate_id=17335300037&sub_id=camp1"
    /// );
    /// ```
    pub fn generate(&self, canonical_url: &str, sub_ids: &[String]) -> String {
        format!(
            "{}?origin_link={}&affiliate_id={}&sub_id={}",
            REDIRECT_PREFIX,
            encode_uri_component(canonical_url),
            self.affiliate_id,
            sub_ids.join("-")
        )
    }
}

/// Percent-encodes `value` the way `encodeURIComponent` does.
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_without_sub_ids() {
        let generator = TrackingLinkGenerator::new("123");
        assert_eq!(
            generator.generate("https://shopee.vn/product/1/2", &[]),
            "https://s.shopee.vn/an_redir?origin_link=https%3A%2F%2Fshopee.vn%2Fproduct%2F1%2F2&affiliate_id=123&sub_id="
        );
    }

    #[test]
    fn test_generate_joins_sub_ids() {
        let generator = TrackingLinkGenerator::new("123");
        let link = generator.generate(
            "https://shopee.vn/product/1/2",
            &["camp1".to_string(), "fb".to_string(), "post9".to_string()],
        );
        assert!(link.ends_with("&affiliate_id=123&sub_id=camp1-fb-post9"));
    }

    #[test]
    fn test_encode_uri_component_unreserved() {
        assert_eq!(encode_uri_component("aZ09-_.!~*'()"), "aZ09-_.!~*'()");
    }

    #[test]
    fn test_encode_uri_component_reserved() {
        assert_eq!(encode_uri_component("a b&c=d/e?f#g"), "a%20b%26c%3Dd%2Fe%3Ff%23g");
    }

    #[test]
    fn test_encode_uri_component_utf8() {
        assert_eq!(encode_uri_component("áo"), "%C3%A1o");
    }
}
