//! Store API routes
//!
//! Wires the store domain to HTTP routes.

use axum::Router;
use domain_store::{StoreService, handlers};

use crate::state::AppState;

/// Create the store router
pub fn router(state: &AppState) -> Router {
    // The adapter clone shares the underlying connection pool
    let service = StoreService::new(state.store.clone());

    // Return the domain's router
    handlers::router(service)
}
