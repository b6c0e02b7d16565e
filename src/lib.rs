//! # Affiliate Link Converter
//!
//! Turns marketplace product links pasted in free-form text into affiliate
//! tracking links enriched with product metadata.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Conversion entities and outbound ports
//! - **Application Layer** ([`application`]) - Link resolution and batch orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis cache, redirect client, partner API client
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//! - **Utilities** ([`utils`]) - Pure link extraction, canonicalization and signing
//!
//! ## Pipeline
//!
//! ```text
//! text ─▶ extract ─▶ resolve ─▶ canonicalize ─┬─▶ tracking link ─┬─▶ result
//!                                             └─▶ metadata ──────┘
//! ```
//!
//! Every unique link yields exactly one result. Redirect and metadata
//! failures degrade individual fields instead of failing the request.
//!
//! ## Quick Start
//!
//! ```bash
//! export APP_ID="..." APP_SECRET="..."       # Optional, enables metadata
//! export REDIS_URL="redis://localhost:6379"  # Optional
//!
//! cargo run
//! curl -X POST localhost:3000/api/convert-text \
//!      -H 'content-type: application/json' \
//!      -d '{"text":"shopee.vn/product/111/222","subIds":["camp1"]}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ConversionService, ResolverService};
    pub use crate::domain::entities::{ConversionResult, ProductInfo, ResolvedDestination};
    pub use crate::domain::ports::{ProductCatalog, RedirectFollower};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
