//! MCP (Model Context Protocol) route handlers
//!
//! This module implements the Model Context Protocol handlers for the
//! shipping service. It exports `handle_tool_call` publicly to make it
//! accessible for tests.

use super::{helpers::*, models::*};
use crate::cart::{helpers::*, models::*, state::*};
use crate::shipping::{format_shipping_cost, Currency};
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};
use tracing::{info, warn};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse)) // Trailing slash safety
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse() -> impl IntoResponse {
    (
        [("content-type", "text/event-stream")],
        "event: endpoint\ndata: /mcp\n\n",
    )
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            warn!(error = %e.body_text(), "JSON-RPC parse error");
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, PARSE_ERROR, "Parse error")),
            )
                .into_response();
        }
    };

    let id = req.id.unwrap_or(Value::Null);
    let method_name = req.method.as_str();
    let params = req.params.unwrap_or(Value::Null);

    info!(method = method_name, id = ?id, "MCP call");

    let response_body = match method_name {
        "initialize" => rpc_success(id, handle_initialize()),
        "notifications/initialized" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, handle_tools_list()),
        "tools/call" => {
            let tool_name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let args = params.get("arguments").cloned().unwrap_or(Value::Null);

            match handle_tool_call(&state, tool_name, args) {
                Ok(result) => rpc_success(id, result),
                Err(msg) => rpc_error(id, INVALID_PARAMS, msg),
            }
        }
        "ping" => rpc_success(id, json!({})),
        _ => {
            warn!(method = method_name, "Unknown MCP method");
            rpc_error(id, METHOD_NOT_FOUND, "Method not found")
        }
    };

    Json(response_body).into_response()
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": true }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

fn item_schema() -> Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "required": ["id"],
            "properties": {
                "id": { "type": "string" },
                "quantity": { "type": "integer", "default": 1 },
                "price": { "type": "number", "default": 0 },
                "weight": { "type": "number", "description": "Unit weight in kg (defaults to 0.5)" }
            }
        }
    })
}

fn destination_properties() -> Value {
    json!({
        "cartId": { "type": "string" },
        "items": item_schema(),
        "countryCode": { "type": "string" },
        "city": { "type": "string" }
    })
}

/// Handles `tools/list` request.
fn handle_tools_list() -> Value {
    json!({
        "tools": [
            {
                "name": ADD_TO_CART_TOOL,
                "title": "Add items to cart",
                "description": "Adds the provided items to the active cart and returns its state.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "items": item_schema(),
                        "cartId": { "type": "string" }
                    },
                    "required": ["items"],
                    "additionalProperties": false
                }
            },
            {
                "name": ESTIMATE_SHIPPING_TOOL,
                "title": "Estimate shipping",
                "description": "Quotes standard shipping for a cart to a destination.",
                "inputSchema": {
                    "type": "object",
                    "properties": destination_properties(),
                    "required": ["countryCode"],
                    "additionalProperties": false
                }
            },
            {
                "name": SHIPPING_OPTIONS_TOOL,
                "title": "Shipping options",
                "description": "Lists economy, standard and priority shipping options for a cart.",
                "inputSchema": {
                    "type": "object",
                    "properties": destination_properties(),
                    "required": ["countryCode"],
                    "additionalProperties": false
                }
            },
            {
                "name": CHECKOUT_TOOL,
                "title": "Checkout",
                "description": "Checks out the cart and returns a receipt with shipping.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "cartId": { "type": "string" },
                        "countryCode": { "type": "string" },
                        "city": { "type": "string" }
                    },
                    "required": ["cartId", "countryCode"],
                    "additionalProperties": false
                }
            }
        ]
    })
}

/// Handles `tools/call` request (Business Logic).
pub fn handle_tool_call(state: &AppState, name: &str, args: Value) -> Result<Value, String> {
    match name {
        ADD_TO_CART_TOOL => handle_add_to_cart_tool(state, args),
        ESTIMATE_SHIPPING_TOOL => handle_estimate_shipping_tool(state, args),
        SHIPPING_OPTIONS_TOOL => handle_shipping_options_tool(state, args),
        CHECKOUT_TOOL => handle_checkout_tool(state, args),
        _ => Err(format!("Unknown tool: {}", name)),
    }
}

/// Handles the add_to_cart tool functionality
fn handle_add_to_cart_tool(state: &AppState, args: Value) -> Result<Value, String> {
    let input: AddToCartInput =
        serde_json::from_value(args).map_err(|e| format!("Invalid arguments: {}", e))?;
    validate_items(&input.items).map_err(|e| e.to_string())?;

    let cart_id = get_or_create_cart_id(input.cart_id);

    let current_items = {
        let mut cart_items = state.carts.entry(cart_id.clone()).or_default();
        update_cart_with_new_items(&mut cart_items, input.items).map_err(|e| e.to_string())?;
        cart_items.clone()
    };
    let message = format!("Cart {} now has {} item(s).", cart_id, current_items.len());

    tool_result(
        message,
        &json!({
            "cartId": cart_id,
            "items": current_items
        }),
    )
}

/// Handles the estimate_shipping tool functionality
fn handle_estimate_shipping_tool(state: &AppState, args: Value) -> Result<Value, String> {
    let input: QuoteInput =
        serde_json::from_value(args).map_err(|e| format!("Invalid arguments: {}", e))?;
    let response = build_quote(state, &input).map_err(|e| e.to_string())?;

    let message = format!(
        "Shipping to {}: {} via {} ({}).",
        input.destination.country_code.trim().to_uppercase(),
        response.display,
        response.quote.courier(),
        response.quote.estimated_days()
    );
    tool_result(message, &response)
}

/// Handles the shipping_options tool functionality
fn handle_shipping_options_tool(state: &AppState, args: Value) -> Result<Value, String> {
    let input: QuoteInput =
        serde_json::from_value(args).map_err(|e| format!("Invalid arguments: {}", e))?;
    let response = build_options(state, &input).map_err(|e| e.to_string())?;

    let message = response
        .options
        .iter()
        .map(|o| {
            format!(
                "{}: {} ({})",
                o.name,
                format_shipping_cost(o.total_kes, Currency::Kes),
                o.estimated_days
            )
        })
        .collect::<Vec<_>>()
        .join("; ");
    tool_result(message, &response)
}

/// Handles the checkout tool functionality
fn handle_checkout_tool(state: &AppState, args: Value) -> Result<Value, String> {
    let input: CheckoutInput =
        serde_json::from_value(args).map_err(|e| format!("Invalid arguments: {}", e))?;
    let receipt = checkout_cart(state, input).map_err(|e| e.to_string())?;

    let message = format!(
        "Checked out now: {} (shipping {})",
        receipt.summary, receipt.shipping_display
    );
    tool_result(message, &receipt)
}
