//! Connectivity diagnostics endpoint
//!
//! Reports backend/database status for quick troubleshooting. Store errors
//! are folded into the status text (truncated) instead of failing the
//! request.

use axum::{Json, Router, extract::State, routing::get};
use domain_store::{DocumentStore, error::truncate_detail};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct DiagnosticsResponse {
    backend: &'static str,
    database: String,
    database_url: &'static str,
    database_name: &'static str,
    connection_status: &'static str,
    collections: Vec<String>,
}

/// Create the diagnostics router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/test", get(diagnostics))
        .with_state(state)
}

/// Report backend and database connectivity status
async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let configured = state.config.mongodb.is_some();

    let mut response = DiagnosticsResponse {
        backend: "running",
        database: "not available".to_string(),
        database_url: if configured { "set" } else { "not set" },
        database_name: if configured { "set" } else { "not set" },
        connection_status: "not connected",
        collections: Vec::new(),
    };

    if state.store.is_configured() {
        response.connection_status = "connected";

        match state.store.list_collections().await {
            Ok(names) => {
                response.database = "connected".to_string();
                response.collections = names;
            }
            Err(e) => {
                response.database = format!(
                    "connected but error: {}",
                    truncate_detail(&e.to_string())
                );
            }
        }
    }

    Json(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use core_config::{Environment, app_info, server::ServerConfig};
    use domain_store::MongoStore;

    fn storeless_state() -> AppState {
        AppState {
            config: Config {
                app: app_info!(),
                mongodb: None,
                server: ServerConfig::default(),
                environment: Environment::Development,
            },
            mongo_client: None,
            store: MongoStore::disconnected(),
        }
    }

    #[tokio::test]
    async fn test_diagnostics_storeless() {
        let Json(response) = diagnostics(State(storeless_state())).await;

        assert_eq!(response.backend, "running");
        assert_eq!(response.database, "not available");
        assert_eq!(response.database_url, "not set");
        assert_eq!(response.database_name, "not set");
        assert_eq!(response.connection_status, "not connected");
        assert!(response.collections.is_empty());
    }
}
