//! MCP Protocol Helpers
//!
//! This module contains helper functions for JSON-RPC communication and
//! tool result envelopes.

use serde::Serialize;
use serde_json::{json, Value};

/// Builds a JSON-RPC 2.0 success response.
///
/// # Arguments
///
/// * `id` – The request identifier that must be echoed back.
/// * `result` – The payload representing the successful outcome.
///
/// # Returns
///
/// A `serde_json::Value` shaped as a JSON-RPC success envelope.
pub fn rpc_success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Builds a JSON-RPC 2.0 error response.
///
/// # Arguments
///
/// * `id` – The request identifier (or `null` if unavailable).
/// * `code` – The JSON-RPC error code (e.g., -32601 for method not found).
/// * `message` – Human-readable description of the error.
///
/// # Returns
///
/// A `serde_json::Value` shaped as a JSON-RPC error envelope.
pub fn rpc_error(id: Value, code: i32, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}

/// Wraps a tool outcome as MCP content: a text line plus structured data.
pub fn tool_result<T: Serialize>(
    text: impl Into<String>,
    structured: &T,
) -> Result<Value, String> {
    let structured = serde_json::to_value(structured)
        .map_err(|e| format!("Failed to encode tool result: {}", e))?;

    Ok(json!({
        "content": [{ "type": "text", "text": text.into() }],
        "structuredContent": structured,
    }))
}
