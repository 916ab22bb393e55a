//! HTTP handlers for the store API

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{InternalServerErrorResponse, ValidationErrorResponse},
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::StoreResult;
use crate::models::{NewProduct, Order, OrderItem, Product, User};
use crate::query::ProductQuery;
use crate::service::{SeedOutcome, StoreService};
use crate::store::DocumentStore;

/// OpenAPI documentation for the store API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_order, seed_products),
    components(
        schemas(
            Product, NewProduct, Order, OrderItem, User,
            OrderCreated, SeedResponse
        ),
        responses(ValidationErrorResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Store", description = "Product browsing, demo seeding, and order capture")
    )
)]
pub struct ApiDoc;

/// Create the store router with all HTTP endpoints
pub fn router<S: DocumentStore + 'static>(service: StoreService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/products", get(list_products))
        .route("/orders", post(create_order))
        .route("/seed", post(seed_products))
        .with_state(shared_service)
}

/// List products with optional filters
///
/// `category` and `featured` are exact matches; `q` is a case-insensitive
/// substring search over title and description. All three compose as AND.
#[utoipa::path(
    get,
    path = "/products",
    tag = "Store",
    params(ProductQuery),
    responses(
        (status = 200, description = "Matching products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<S: DocumentStore>(
    State(service): State<Arc<StoreService<S>>>,
    Query(params): Query<ProductQuery>,
) -> StoreResult<Json<Vec<Product>>> {
    let products = service.list_products(params).await?;
    Ok(Json(products))
}

/// Response body for a created order
#[derive(Serialize, ToSchema)]
pub struct OrderCreated {
    pub status: &'static str,
    /// Store-generated order identifier
    pub order_id: String,
}

/// Create an order
#[utoipa::path(
    post,
    path = "/orders",
    tag = "Store",
    request_body = Order,
    responses(
        (status = 200, description = "Order created", body = OrderCreated),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_order<S: DocumentStore>(
    State(service): State<Arc<StoreService<S>>>,
    ValidatedJson(order): ValidatedJson<Order>,
) -> StoreResult<Json<OrderCreated>> {
    let order_id = service.create_order(order).await?;
    Ok(Json(OrderCreated {
        status: "ok",
        order_id,
    }))
}

/// Response body for the seeding endpoint
#[derive(Serialize, ToSchema)]
#[serde(untagged)]
pub enum SeedResponse {
    AlreadySeeded {
        status: &'static str,
        message: &'static str,
    },
    Seeded {
        status: &'static str,
        inserted: usize,
    },
}

impl From<SeedOutcome> for SeedResponse {
    fn from(outcome: SeedOutcome) -> Self {
        match outcome {
            SeedOutcome::AlreadySeeded => SeedResponse::AlreadySeeded {
                status: "ok",
                message: "Products already seeded",
            },
            SeedOutcome::Seeded { inserted } => SeedResponse::Seeded {
                status: "ok",
                inserted,
            },
        }
    }
}

/// Seed demo products if the collection is empty
#[utoipa::path(
    post,
    path = "/seed",
    tag = "Store",
    responses(
        (status = 200, description = "Seed outcome", body = SeedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn seed_products<S: DocumentStore>(
    State(service): State<Arc<StoreService<S>>>,
) -> StoreResult<Json<SeedResponse>> {
    let outcome = service.seed_demo_products().await?;
    Ok(Json(outcome.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_response_serialization() {
        let seeded: SeedResponse = SeedOutcome::Seeded { inserted: 4 }.into();
        let json = serde_json::to_value(&seeded).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["inserted"], 4);
        assert!(json.get("message").is_none());

        let already: SeedResponse = SeedOutcome::AlreadySeeded.into();
        let json = serde_json::to_value(&already).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["message"], "Products already seeded");
        assert!(json.get("inserted").is_none());
    }

    #[test]
    fn test_order_created_serialization() {
        let body = OrderCreated {
            status: "ok",
            order_id: "65f1a2b3c4d5e6f7a8b9c0d1".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["order_id"], "65f1a2b3c4d5e6f7a8b9c0d1");
    }
}
