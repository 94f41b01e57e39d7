use artisan_shipping::cart::AppState;
use artisan_shipping::config::Config;
use artisan_shipping::router::create_app_router;
use artisan_shipping::telemetry::init_tracing;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = Config::from_env()?;

    // Initialize application state
    let state = Arc::new(AppState::new());

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let addr = config.socket_addr();
    info!(%addr, "Server running");

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use artisan_shipping::cart::state::AppState;
    use artisan_shipping::mcp::handlers::handle_tool_call;
    use artisan_shipping::mcp::models::ADD_TO_CART_TOOL;
    use artisan_shipping::shipping::CartItemWithWeight;
    use serde_json::json;

    #[tokio::test]
    async fn test_state_manager_and_aggregation() {
        let state = AppState::new();
        let cart_id = "test_cart_1";

        // 1. Initial Insert (Simulate Sync)
        let initial_items = vec![CartItemWithWeight {
            id: "mug".into(),
            weight: Some(0.4),
            quantity: 2,
            price: 12.0,
        }];
        state.carts.insert(cart_id.into(), initial_items);

        // 2. Tool Call (Simulate Add)
        let args = json!({
            "cartId": cart_id,
            "items": [
                { "id": "mug", "quantity": 3, "price": 12.0 },
                { "id": "basket", "quantity": 1, "price": 40.0, "weight": 1.2 }
            ]
        });

        handle_tool_call(&state, ADD_TO_CART_TOOL, args).expect("Tool call failed");

        // 3. Verify
        let items = state.carts.get(cart_id).unwrap();

        let mug = items.iter().find(|i| i.id == "mug").unwrap();
        assert_eq!(mug.quantity, 5, "Mug quantity should aggregate to 2+3=5");
        assert_eq!(mug.weight, Some(0.4));

        let basket = items.iter().find(|i| i.id == "basket").unwrap();
        assert_eq!(basket.quantity, 1, "Basket should be added");
    }
}
