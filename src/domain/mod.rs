//! Domain layer containing the conversion data model and port traits.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures passed through the pipeline
//! - [`ports`] - Traits for network collaborators (redirect following, metadata lookup)
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Port traits define contracts implemented by the infrastructure layer
//! - Pipeline logic lives in services (see [`crate::application::services`])

pub mod entities;
pub mod ports;
