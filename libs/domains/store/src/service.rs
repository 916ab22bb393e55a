//! Store service - business logic layer
//!
//! Validates inbound entities, runs the browse query engine, and owns the
//! demo-seeding routine. All persistence goes through the
//! [`DocumentStore`] adapter.

use std::sync::Arc;

use mongodb::bson::{self, doc};
use tracing::instrument;
use validator::Validate;

use crate::error::{StoreError, StoreResult};
use crate::models::{NewProduct, Order, Product};
use crate::query::{self, ProductQuery};
use crate::store::{DocumentStore, collections};

/// Result of the seeding routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The product collection already had documents; nothing was written.
    AlreadySeeded,
    /// The demo set was inserted.
    Seeded { inserted: usize },
}

/// Service providing the store's business operations.
pub struct StoreService<S: DocumentStore> {
    store: Arc<S>,
}

impl<S: DocumentStore> StoreService<S> {
    /// Create a new StoreService over the given document store.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// List products for a browse request.
    ///
    /// Supplied `category`/`featured` parameters become the store-level
    /// exact-match filter; a supplied `q` then narrows the fetched results
    /// with a case-insensitive substring pass over title and description.
    /// Result order is whatever the store returned.
    #[instrument(skip(self))]
    pub async fn list_products(&self, params: ProductQuery) -> StoreResult<Vec<Product>> {
        let filter = query::build_filter(&params);
        let documents = self.store.find_many(collections::PRODUCT, filter).await?;

        let mut products = documents
            .into_iter()
            .map(Product::from_document)
            .collect::<StoreResult<Vec<_>>>()?;

        if let Some(ref q) = params.q {
            products.retain(|product| query::matches_text(product, q));
        }

        Ok(products)
    }

    /// Persist an order and return its store-generated identifier.
    #[instrument(skip(self, order), fields(items = order.items.len()))]
    pub async fn create_order(&self, order: Order) -> StoreResult<String> {
        order
            .validate()
            .map_err(|e| StoreError::Validation(e.to_string()))?;

        let document =
            bson::to_document(&order).map_err(|e| StoreError::Write(e.to_string()))?;
        let order_id = self.store.insert(collections::ORDER, document).await?;

        tracing::info!(order_id = %order_id, "Order created");
        Ok(order_id)
    }

    /// Populate the product collection with the fixed demo set, once.
    ///
    /// The emptiness check and the inserts are not atomic: two concurrent
    /// seed calls can both observe an empty collection and insert the demo
    /// set twice. Partial inserts on a mid-seed failure are not rolled
    /// back.
    #[instrument(skip(self))]
    pub async fn seed_demo_products(&self) -> StoreResult<SeedOutcome> {
        let count = self.store.count(collections::PRODUCT, doc! {}).await?;
        if count > 0 {
            tracing::debug!(count, "Product collection already populated, skipping seed");
            return Ok(SeedOutcome::AlreadySeeded);
        }

        let mut inserted = 0;
        for product in demo_products() {
            product
                .validate()
                .map_err(|e| StoreError::Validation(e.to_string()))?;
            let document =
                bson::to_document(&product).map_err(|e| StoreError::Write(e.to_string()))?;
            self.store.insert(collections::PRODUCT, document).await?;
            inserted += 1;
        }

        tracing::info!(inserted, "Seeded demo products");
        Ok(SeedOutcome::Seeded { inserted })
    }
}

impl<S: DocumentStore> Clone for StoreService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

fn demo_product(
    title: &str,
    description: &str,
    price: f64,
    category: &str,
    image: &str,
    colors: &[&str],
    sizes: &[&str],
    rating: f64,
    featured: bool,
) -> NewProduct {
    NewProduct {
        title: title.to_string(),
        description: Some(description.to_string()),
        price,
        category: category.to_string(),
        in_stock: true,
        image: Some(image.to_string()),
        images: vec![],
        colors: colors.iter().map(|c| c.to_string()).collect(),
        sizes: sizes.iter().map(|s| s.to_string()).collect(),
        rating: Some(rating),
        featured,
    }
}

/// The fixed demonstration catalog, inserted in this order.
pub fn demo_products() -> Vec<NewProduct> {
    vec![
        demo_product(
            "AeroFlex Tee",
            "Breathable performance tee",
            29.99,
            "Tops",
            "https://images.unsplash.com/photo-1520975682031-5fdb9186b8a0?q=80&w=1200&auto=format&fit=crop",
            &["Black", "White", "Navy"],
            &["S", "M", "L", "XL"],
            4.6,
            true,
        ),
        demo_product(
            "Contour Jeans",
            "Slim-fit stretch denim",
            59.0,
            "Bottoms",
            "https://images.unsplash.com/photo-1512436991641-6745cdb1723f?q=80&w=1200&auto=format&fit=crop",
            &["Indigo", "Black"],
            &["28", "30", "32", "34"],
            4.4,
            true,
        ),
        demo_product(
            "Nimbus Hoodie",
            "Cloud-soft fleece hoodie",
            49.5,
            "Outerwear",
            "https://images.unsplash.com/photo-1542060748-10c28b62716e?q=80&w=1200&auto=format&fit=crop",
            &["Gray", "Forest", "Sand"],
            &["S", "M", "L", "XL"],
            4.7,
            false,
        ),
        demo_product(
            "Stride Sneakers",
            "Lightweight everyday sneakers",
            79.0,
            "Footwear",
            "https://images.unsplash.com/photo-1520256862855-398228c41684?q=80&w=1200&auto=format&fit=crop",
            &["White", "Gray"],
            &["7", "8", "9", "10", "11"],
            4.5,
            false,
        ),
    ]
}
