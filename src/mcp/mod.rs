//! Model Context Protocol (MCP) Module
//!
//! This module exposes the cart and shipping operations as MCP tools:
//! - Protocol models (JsonRpcRequest, constants)
//! - RPC helpers (success/error responses, tool results)
//! - MCP handlers (initialize, tools/list, tools/call, etc.)

pub mod handlers;
pub mod helpers;
pub mod models;

// Re-export commonly used types and functions
pub use handlers::routes;
