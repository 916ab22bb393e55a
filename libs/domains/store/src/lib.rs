//! Store Domain
//!
//! Product browsing, demo seeding, and order capture over a document store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (/products, /orders, /seed)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, query/filter engine, seeding
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │    Store    │  ← Document-store adapter (trait + MongoDB implementation)
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, validation rules
//! └─────────────┘
//! ```
//!
//! The adapter works in collection-scoped `bson::Document`s; that
//! loosely-typed shape stops at the service boundary, where results are
//! converted into typed entities with the store identifier promoted to a
//! public `id` text field.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_store::{handlers, mongodb::MongoStore, service::StoreService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("store");
//!
//! let store = MongoStore::new(db);
//! let service = StoreService::new(store);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod query;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use error::{StoreError, StoreResult};
pub use handlers::ApiDoc;
pub use models::{NewProduct, Order, OrderItem, Product, User};
pub use mongodb::MongoStore;
pub use query::ProductQuery;
pub use service::{SeedOutcome, StoreService, demo_products};
pub use store::{DocumentStore, collections};
