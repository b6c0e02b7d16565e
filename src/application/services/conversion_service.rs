//! Batch conversion of marketplace links found in free-form text.

use std::sync::Arc;

use crate::application::services::ResolverService;
use crate::domain::entities::ConversionResult;
use crate::domain::ports::ProductCatalog;
use crate::utils::canonicalizer::canonicalize;
use crate::utils::link_extractor::{ensure_scheme, extract_links};
use crate::utils::tracking_link::TrackingLinkGenerator;
use futures::future::join_all;
use tracing::{debug, info};

/// Orchestrates extraction, resolution, canonicalization and enrichment.
///
/// Every unique link in the input yields exactly one [`ConversionResult`].
/// Per-link failures degrade individual fields and never abort the batch.
pub struct ConversionService {
    resolver: ResolverService,
    catalog: Arc<dyn ProductCatalog>,
    tracking: TrackingLinkGenerator,
}

impl ConversionService {
    /// Creates a new conversion service.
    pub fn new(
        resolver: ResolverService,
        catalog: Arc<dyn ProductCatalog>,
        tracking: TrackingLinkGenerator,
    ) -> Self {
        Self {
            resolver,
            catalog,
            tracking,
        }
    }

    /// Converts every unique marketplace link in `text`.
    ///
    /// # Concurrency
    ///
    /// Links are processed concurrently on the calling task and joined before
    /// returning. Results keep the order in which links first appear in the
    /// text. Text without marketplace links yields an empty vector.
    pub async fn convert_text(&self, text: &str, sub_ids: &[String]) -> Vec<ConversionResult> {
        let links = extract_links(text);

        if links.is_empty() {
            debug!("No marketplace links found");
            return Vec::new();
        }

        info!(links = links.len(), "Converting marketplace links");

        let results = join_all(
            links
                .into_iter()
                .map(|link| self.convert_link(link, sub_ids)),
        )
        .await;

        metrics::counter!("links_converted_total").increment(results.len() as u64);

        results
    }

    /// Converts a single link as it appeared in the input text.
    ///
    /// Resolves the link, derives its canonical form, then generates the
    /// tracking link and looks up metadata in parallel. Links without an
    /// item id skip the lookup and receive placeholder metadata.
    pub async fn convert_link(&self, original: String, sub_ids: &[String]) -> ConversionResult {
        let link = ensure_scheme(&original);
        let destination = self.resolver.resolve(&link).await;
        let product = canonicalize(&destination.url);

        debug!(
            original = %original,
            canonical_url = %product.canonical_url,
            item_id = ?product.item_id,
            "Link canonicalized"
        );

        let tracking_link = async { self.tracking.generate(&product.canonical_url, sub_ids) };
        let info = async {
            match product.item_id.as_deref() {
                Some(item_id) => self.catalog.lookup(item_id).await,
                None => None,
            }
        };

        let (tracking_link, info) = tokio::join!(tracking_link, info);

        ConversionResult::new(original, tracking_link, info)
    }
}
