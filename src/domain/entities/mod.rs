//! Core domain entities of the conversion pipeline.
//!
//! Entities are plain data structures. The only behavior they carry is
//! default substitution when a result is assembled.
//!
//! # Entity Types
//!
//! - [`ResolvedDestination`] - Where a pasted link actually points
//! - [`ProductInfo`] - Display metadata returned by the partner API
//! - [`ConversionResult`] - One converted link, as returned to callers

pub mod conversion;
pub mod destination;
pub mod product;

pub use conversion::ConversionResult;
pub use destination::{Resolution, ResolvedDestination};
pub use product::{DEFAULT_PRODUCT_NAME, ProductInfo};
