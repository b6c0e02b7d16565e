//! Partner API request signing.

use sha2::{Digest, Sha256};

/// Computes the request signature expected by the partner API.
///
/// The digest covers `app_id`, `timestamp`, the exact request body and
/// `app_secret`, concatenated without separators. Returns 64 lowercase
/// hex characters.
pub fn sign_request(app_id: &str, timestamp: i64, payload: &str, app_secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(app_id.as_bytes());
    hasher.update(timestamp.to_string().as_bytes());
    hasher.update(payload.as_bytes());
    hasher.update(app_secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Formats the `Authorization` header value for a signed request.
pub fn authorization_header(app_id: &str, timestamp: i64, signature: &str) -> String {
    format!("SHA256 Credential={app_id}, Timestamp={timestamp}, Signature={signature}")
}
