//! API routes module
//!
//! Defines all HTTP API routes for the store backend. The business routes
//! (/products, /orders, /seed) come from the store domain; the root
//! greeting, diagnostics, and readiness endpoints live here.

pub mod diagnostics;
pub mod health;
pub mod store;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(store::router(state))
        .merge(diagnostics::router(state.clone()))
        .merge(health::router(state.clone()))
}

/// Root greeting, used by frontends as a cheap reachability probe
async fn root() -> Json<Value> {
    Json(json!({ "message": "Clothing Store Backend running" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_root_greeting() {
        let Json(body) = root().await;
        assert_eq!(body["message"], "Clothing Store Backend running");
    }
}
