//! Pure helpers for link processing and request signing.
//!
//! - [`link_extractor`] - Marketplace link extraction from free-form text
//! - [`canonicalizer`] - Item id extraction and canonical URL derivation
//! - [`tracking_link`] - Affiliate redirect link generation
//! - [`signature`] - Partner API request signing

pub mod canonicalizer;
pub mod link_extractor;
pub mod signature;
pub mod tracking_link;
