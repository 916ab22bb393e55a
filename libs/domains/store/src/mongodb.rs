//! MongoDB implementation of DocumentStore

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Database,
    bson::{Bson, Document},
};
use tracing::instrument;

use crate::error::{StoreError, StoreResult};
use crate::store::{COLLECTION_LIST_LIMIT, DocumentStore};

/// MongoDB-backed document store.
///
/// Holds an optional database handle: `None` models the "no store
/// configured" state, in which reads return empty results and writes fail
/// with `StoreError::Unavailable`. The handle is cheap to clone and shares
/// the underlying connection pool.
#[derive(Clone)]
pub struct MongoStore {
    db: Option<Database>,
}

impl MongoStore {
    /// Create a store backed by a connected database.
    pub fn new(db: Database) -> Self {
        Self { db: Some(db) }
    }

    /// Create a store with no backing database.
    ///
    /// Read operations return empty results; writes fail with
    /// `StoreError::Unavailable`.
    pub fn disconnected() -> Self {
        Self { db: None }
    }

    /// Whether a database handle is configured.
    pub fn is_configured(&self) -> bool {
        self.db.is_some()
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    #[instrument(skip(self, document))]
    async fn insert(&self, collection: &str, document: Document) -> StoreResult<String> {
        let db = self.db.as_ref().ok_or(StoreError::Unavailable)?;

        let result = db
            .collection::<Document>(collection)
            .insert_one(document)
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;

        let id = match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        };

        tracing::info!(collection, id = %id, "Document inserted");
        Ok(id)
    }

    #[instrument(skip(self, filter))]
    async fn find_many(&self, collection: &str, filter: Document) -> StoreResult<Vec<Document>> {
        let Some(db) = self.db.as_ref() else {
            return Ok(Vec::new());
        };

        let cursor = db
            .collection::<Document>(collection)
            .find(filter)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::Query(e.to_string()))
    }

    #[instrument(skip(self, filter))]
    async fn count(&self, collection: &str, filter: Document) -> StoreResult<u64> {
        let Some(db) = self.db.as_ref() else {
            return Ok(0);
        };

        db.collection::<Document>(collection)
            .count_documents(filter)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))
    }

    #[instrument(skip(self))]
    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        let Some(db) = self.db.as_ref() else {
            return Ok(Vec::new());
        };

        let mut names = db
            .list_collection_names()
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        names.truncate(COLLECTION_LIST_LIMIT);
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::collections;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn test_disconnected_reads_degrade_to_empty() {
        let store = MongoStore::disconnected();
        assert!(!store.is_configured());

        let found = store
            .find_many(collections::PRODUCT, doc! {})
            .await
            .unwrap();
        assert!(found.is_empty());

        let count = store.count(collections::PRODUCT, doc! {}).await.unwrap();
        assert_eq!(count, 0);

        let names = store.list_collections().await.unwrap();
        assert!(names.is_empty());
    }

    #[tokio::test]
    async fn test_disconnected_insert_is_unavailable() {
        let store = MongoStore::disconnected();
        let result = store
            .insert(collections::PRODUCT, doc! { "title": "Tee" })
            .await;
        assert!(matches!(result, Err(StoreError::Unavailable)));
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_insert_and_find_roundtrip() {
        let url = std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let client = mongodb::Client::with_uri_str(&url).await.unwrap();
        let db = client.database("domain_store_test");
        db.collection::<Document>(collections::PRODUCT)
            .drop()
            .await
            .ok();

        let store = MongoStore::new(db);

        let id = store
            .insert(
                collections::PRODUCT,
                doc! { "title": "Tee", "category": "Tops" },
            )
            .await
            .unwrap();
        assert!(!id.is_empty());

        let found = store
            .find_many(collections::PRODUCT, doc! { "category": "Tops" })
            .await
            .unwrap();
        assert_eq!(found.len(), 1);

        let count = store.count(collections::PRODUCT, doc! {}).await.unwrap();
        assert_eq!(count, 1);
    }
}
