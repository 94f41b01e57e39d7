//! Shopping Cart State Management
//!
//! In-memory cart storage shared by the REST and MCP handlers. The rate
//! engine keeps no state of its own; only carts live here.

use crate::shipping::CartItemWithWeight;
use dashmap::DashMap;
use std::sync::Arc;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing carts
pub struct AppState {
    /// In-memory storage for carts, keyed by cart_id.
    /// DashMap allows concurrent access without external Mutexes.
    pub carts: DashMap<String, Vec<CartItemWithWeight>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new AppState with no carts
    pub fn new() -> Self {
        Self {
            carts: DashMap::new(),
        }
    }

    /// Returns a snapshot of the cart's items, if the cart exists
    pub fn cart_items(&self, cart_id: &str) -> Option<Vec<CartItemWithWeight>> {
        self.carts.get(cart_id).map(|items| items.clone())
    }
}
