//! Business logic services for the application layer.

pub mod conversion_service;
pub mod resolver_service;

pub use conversion_service::ConversionService;
pub use resolver_service::ResolverService;
