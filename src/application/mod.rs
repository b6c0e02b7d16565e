//! Application layer services implementing the conversion pipeline.
//!
//! Services consume the domain port traits and provide a clean API for
//! HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::resolver_service::ResolverService`] - Wrapper unwrapping and short-link following
//! - [`services::conversion_service::ConversionService`] - Batch orchestration per input text

pub mod services;
