//! Partner affiliate API client for product metadata.

use crate::domain::entities::ProductInfo;
use crate::domain::ports::ProductCatalog;
use crate::utils::signature::{authorization_header, sign_request};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, warn};

/// Production GraphQL endpoint of the partner API.
pub const DEFAULT_PARTNER_API_URL: &str = "https://open-api.affiliate.shopee.vn/graphql";

/// Errors raised while querying the partner API.
///
/// These never leave the client: [`ProductCatalog::lookup`] maps them to `None`.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Partner API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Partner API returned status {0}")]
    Status(StatusCode),

    #[error("Partner API returned errors: {0}")]
    GraphQl(String),
}

impl CatalogError {
    /// Transport failures and server-side errors are worth another attempt.
    fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status(status) => status.is_server_error(),
            Self::GraphQl(_) => false,
        }
    }
}

/// Partner application credentials.
#[derive(Debug, Clone)]
pub struct PartnerCredentials {
    pub app_id: String,
    pub app_secret: String,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<ProductOfferData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ProductOfferData {
    #[serde(rename = "productOfferV2")]
    product_offer: Option<ProductOfferConnection>,
}

#[derive(Debug, Deserialize)]
struct ProductOfferConnection {
    #[serde(default)]
    nodes: Vec<ProductInfo>,
}

/// Signed GraphQL client for the partner's product offer API.
///
/// Every request carries an `Authorization` header whose signature is
/// computed over the application id, the Unix timestamp, the exact request
/// body and the application secret. Requests are bounded by the configured
/// timeout; transient failures are retried with jittered exponential backoff.
pub struct AffiliateApiClient {
    client: Client,
    endpoint: String,
    credentials: Option<PartnerCredentials>,
    retries: usize,
}

impl AffiliateApiClient {
    /// Creates a client. Without credentials every lookup returns `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(
        endpoint: impl Into<String>,
        credentials: Option<PartnerCredentials>,
        timeout: Duration,
        retries: usize,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            credentials,
            retries,
        })
    }

    /// Builds the GraphQL request body for one item.
    fn build_payload(item_id: &str) -> String {
        let query = format!(
            "query {{ productOfferV2(itemId: {item_id}) {{ nodes {{ productName imageUrl }} }} }}"
        );
        serde_json::json!({ "query": query }).to_string()
    }

    async fn fetch(
        &self,
        credentials: &PartnerCredentials,
        item_id: &str,
    ) -> Result<Option<ProductInfo>, CatalogError> {
        let payload = Self::build_payload(item_id);
        let timestamp = Utc::now().timestamp();
        let signature = sign_request(
            &credentials.app_id,
            timestamp,
            &payload,
            &credentials.app_secret,
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(
                AUTHORIZATION,
                authorization_header(&credentials.app_id, timestamp, &signature),
            )
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        let body: GraphQlResponse = response.json().await?;

        if let Some(error) = body.errors.into_iter().next() {
            return Err(CatalogError::GraphQl(error.message));
        }

        Ok(body
            .data
            .and_then(|data| data.product_offer)
            .and_then(|offer| offer.nodes.into_iter().next()))
    }
}

#[async_trait]
impl ProductCatalog for AffiliateApiClient {
    async fn lookup(&self, item_id: &str) -> Option<ProductInfo> {
        let credentials = self.credentials.as_ref()?;

        if item_id.is_empty() || !item_id.chars().all(|c| c.is_ascii_digit()) {
            debug!(item_id, "Skipping lookup for non-numeric item id");
            return None;
        }

        let strategy = ExponentialBackoff::from_millis(10)
            .factor(10)
            .max_delay(Duration::from_secs(2))
            .map(jitter)
            .take(self.retries);

        let result = RetryIf::spawn(
            strategy,
            || self.fetch(credentials, item_id),
            |e: &CatalogError| e.is_transient(),
        )
        .await;

        match result {
            Ok(Some(info)) => {
                metrics::counter!("metadata_lookups_total", "outcome" => "found").increment(1);
                Some(info)
            }
            Ok(None) => {
                debug!(item_id, "Partner API returned no product");
                metrics::counter!("metadata_lookups_total", "outcome" => "empty").increment(1);
                None
            }
            Err(e) => {
                warn!(item_id, error = %e, "Product metadata lookup failed");
                metrics::counter!("metadata_lookups_total", "outcome" => "failed").increment(1);
                None
            }
        }
    }

    fn is_enabled(&self) -> bool {
        self.credentials.is_some()
    }
}
