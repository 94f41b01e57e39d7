//! MCP Protocol Models and Constants
//!
//! This module contains all data structures and constants related to the
//! Model Context Protocol (MCP) specification.

use serde::Deserialize;
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

/// Tool that adds weighted, priced items to a cart
pub const ADD_TO_CART_TOOL: &str = "add_to_cart";
/// Tool that quotes standard shipping for a cart
pub const ESTIMATE_SHIPPING_TOOL: &str = "estimate_shipping";
/// Tool that lists tiered shipping options
pub const SHIPPING_OPTIONS_TOOL: &str = "shipping_options";
/// Name of the checkout tool
pub const CHECKOUT_TOOL: &str = "checkout";
/// Server identifier
pub const SERVER_NAME: &str = "artisan-shipping";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC error codes used by the endpoint
pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}
