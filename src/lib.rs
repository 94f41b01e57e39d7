//! Artisan Shipping Library
//!
//! Shipping rate engine for the artisan storefront, plus the cart service
//! that exposes it over REST and MCP (Model Context Protocol).

// Domain modules
pub mod cart;
pub mod mcp;
pub mod shipping;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
pub mod telemetry;
