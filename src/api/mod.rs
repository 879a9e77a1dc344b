//! HTTP API module.
//!
//! Provides REST endpoints for:
//! - Product catalog listing
//! - Health check

pub mod health;
pub mod products;

pub use health::health_routes;
pub use products::products_routes;
