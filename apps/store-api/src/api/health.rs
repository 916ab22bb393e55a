//! Readiness endpoint

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct ReadyResponse {
    status: String,
    mongodb: bool,
}

/// Create a readiness router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - verifies the MongoDB connection.
///
/// Storeless mode reports degraded: the API still serves, but reads come
/// back empty and writes fail.
async fn readiness_check(State(state): State<AppState>) -> Json<ReadyResponse> {
    let mongodb_healthy = match &state.mongo_client {
        Some(client) => database::mongodb::check_health(client).await,
        None => false,
    };

    Json(ReadyResponse {
        status: if mongodb_healthy {
            "ready"
        } else {
            "degraded"
        }
        .to_string(),
        mongodb: mongodb_healthy,
    })
}
