//! Storefront services library
//!
//! Shared code for the two storefront microservices: products-service stores
//! catalogue products ("medianos"), orders-service stores placed orders.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;
pub mod server;
pub mod telemetry;

// Re-export commonly used types
pub use modules::medianos;
pub use modules::orders;
