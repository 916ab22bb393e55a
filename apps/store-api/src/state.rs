//! Application state management.
//!
//! Defines the shared application state passed to all request handlers.

use domain_store::MongoStore;
use mongodb::Client;

/// Shared application state.
///
/// Cloned for each handler (inexpensive handle clones), providing access to:
/// - Application configuration
/// - MongoDB client (None when running storeless)
/// - The document store adapter
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Option<Client>,
    /// Document store adapter handed to the domain service
    pub store: MongoStore,
}
