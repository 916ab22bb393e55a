use async_trait::async_trait;
use mongodb::bson::Document;

use crate::error::StoreResult;

/// Names of the store's logical collections.
pub mod collections {
    pub const PRODUCT: &str = "product";
    pub const ORDER: &str = "order";
    pub const USER: &str = "user";
}

/// Maximum number of collection names reported by diagnostics.
pub const COLLECTION_LIST_LIMIT: usize = 10;

/// Collection-scoped access to the underlying document database.
///
/// This trait is the only place the loosely-typed `bson::Document` shape is
/// allowed; callers convert results into typed entities immediately.
/// Implementations can use different backends (MongoDB in production, a
/// mock in tests).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document into the named collection and return the
    /// store-generated identifier as opaque text.
    ///
    /// Fails with `StoreError::Unavailable` when no store is configured and
    /// `StoreError::Write` when the underlying insert rejects the document.
    async fn insert(&self, collection: &str, document: Document) -> StoreResult<String>;

    /// Return all documents matching an exact-match filter, in store-native
    /// order (no ordering guarantee).
    ///
    /// An empty filter returns the entire collection. When no store is
    /// configured the result is an empty vector, never an error, so read
    /// paths degrade gracefully.
    async fn find_many(&self, collection: &str, filter: Document) -> StoreResult<Vec<Document>>;

    /// Count documents matching a filter. Zero when no store is configured.
    async fn count(&self, collection: &str, filter: Document) -> StoreResult<u64>;

    /// List up to [`COLLECTION_LIST_LIMIT`] collection names.
    ///
    /// Diagnostic-only; not part of the business surface.
    async fn list_collections(&self) -> StoreResult<Vec<String>>;
}
