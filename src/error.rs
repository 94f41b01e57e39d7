//! Error types for the HTTP and MCP surfaces
//!
//! The rate engine itself never fails; these errors only describe requests
//! that are rejected before reaching it.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Numeric input the engine would otherwise have to clamp
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    /// A quote referenced a cart that does not exist
    #[error("cart {0} not found")]
    CartNotFound(String),

    /// Neither a cart id nor inline items were supplied
    #[error("request must include either cartId or items")]
    MissingCart,
}

impl ApiError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ApiError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::CartNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MissingCart => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(json!({
                "error": self.to_string()
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::validation("weight", "must not be negative").status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::CartNotFound("c1".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::MissingCart.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_messages() {
        let err = ApiError::validation("items[0].weight", "must not be negative");
        assert_eq!(err.to_string(), "invalid items[0].weight: must not be negative");
        assert_eq!(ApiError::CartNotFound("abc".into()).to_string(), "cart abc not found");
    }
}
