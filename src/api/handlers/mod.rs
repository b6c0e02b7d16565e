//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod convert;
pub mod health;

pub use convert::convert_text_handler;
pub use health::health_handler;
