//! Shopping Cart Domain Module
//!
//! This module contains the cart-facing side of the service, including:
//! - Request/response models (cart inputs, quotes, receipts)
//! - Business logic helpers (cart merging, validation, quote/checkout flows)
//! - Application state management
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use state::{AppState, SharedState};
