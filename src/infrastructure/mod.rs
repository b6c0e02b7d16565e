//! Infrastructure layer for external integrations.
//!
//! This layer implements the port traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (Redis and no-op implementations)
//! - [`http`] - reqwest adapters for redirect following and the partner API

pub mod cache;
pub mod http;
