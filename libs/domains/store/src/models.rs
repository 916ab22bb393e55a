use mongodb::bson::{self, Bson, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{StoreError, StoreResult};

fn default_true() -> bool {
    true
}

/// Product as returned to callers.
///
/// The `id` field is the store-generated identifier rendered as opaque
/// text; the store-internal representation never reaches callers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-generated identifier
    pub id: String,
    /// Product title
    pub title: String,
    /// Product description
    #[serde(default)]
    pub description: Option<String>,
    /// Price in dollars
    pub price: f64,
    /// Product category
    pub category: String,
    /// Whether the product is in stock
    #[serde(default = "default_true")]
    pub in_stock: bool,
    /// Primary image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Additional image URLs
    #[serde(default)]
    pub images: Vec<String>,
    /// Available colors
    #[serde(default)]
    pub colors: Vec<String>,
    /// Available sizes
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Average rating 0-5
    #[serde(default)]
    pub rating: Option<f64>,
    /// Featured on homepage
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Convert a raw store document into a typed product, promoting the
    /// internal `_id` to the public `id` text field.
    pub fn from_document(mut document: Document) -> StoreResult<Self> {
        let id = match document.remove("_id") {
            Some(Bson::ObjectId(oid)) => oid.to_hex(),
            Some(other) => other.to_string(),
            None => return Err(StoreError::Query("document has no _id".to_string())),
        };
        document.insert("id", id);

        bson::from_document(document).map_err(|e| StoreError::Query(e.to_string()))
    }
}

/// Candidate product, validated before persistence.
///
/// No identifier: the store assigns one at insert.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewProduct {
    /// Product title
    #[validate(length(min = 1))]
    pub title: String,
    /// Product description
    #[serde(default)]
    pub description: Option<String>,
    /// Price in dollars
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// Product category
    pub category: String,
    /// Whether the product is in stock
    #[serde(default = "default_true")]
    pub in_stock: bool,
    /// Primary image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Additional image URLs
    #[serde(default)]
    pub images: Vec<String>,
    /// Available colors
    #[serde(default)]
    pub colors: Vec<String>,
    /// Available sizes
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Average rating 0-5
    #[serde(default)]
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,
    /// Featured on homepage
    #[serde(default)]
    pub featured: bool,
}

/// Line item inside an order.
///
/// Title, price, and image are point-in-time snapshots, deliberately
/// decoupled from the live product so historical orders stay stable.
/// `color`/`size` are not checked against the product's declared options.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct OrderItem {
    /// ID of the referenced product (snapshot reference, no enforced FK)
    pub product_id: String,
    /// Product title at purchase time
    pub title: String,
    /// Unit price at purchase time
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// Quantity ordered
    #[validate(range(min = 1))]
    pub quantity: u32,
    /// Selected color
    #[serde(default)]
    pub color: Option<String>,
    /// Selected size
    #[serde(default)]
    pub size: Option<String>,
    /// Thumbnail image
    #[serde(default)]
    pub image: Option<String>,
}

/// Order as submitted by the caller.
///
/// Subtotal, shipping, and total are caller-supplied and are not
/// recomputed or cross-checked against the items.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Order {
    /// Items in the order
    #[validate(length(min = 1), nested)]
    pub items: Vec<OrderItem>,
    /// Subtotal amount
    #[validate(range(min = 0.0))]
    pub subtotal: f64,
    /// Shipping cost
    #[validate(range(min = 0.0))]
    pub shipping: f64,
    /// Total amount
    #[validate(range(min = 0.0))]
    pub total: f64,
    /// Customer full name
    #[serde(default)]
    pub customer_name: Option<String>,
    /// Customer email
    #[serde(default)]
    pub customer_email: Option<String>,
    /// Shipping address
    #[serde(default)]
    pub address: Option<String>,
}

/// User schema for the `user` collection.
///
/// Not exercised by any exposed operation; defined for schema
/// completeness.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct User {
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Address
    pub address: String,
    /// Age in years
    #[serde(default)]
    #[validate(range(min = 0, max = 120))]
    pub age: Option<u32>,
    /// Whether the user is active
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};

    fn valid_product() -> NewProduct {
        NewProduct {
            title: "AeroFlex Tee".to_string(),
            description: Some("Breathable performance tee".to_string()),
            price: 29.99,
            category: "Tops".to_string(),
            in_stock: true,
            image: None,
            images: vec![],
            colors: vec![],
            sizes: vec![],
            rating: Some(4.6),
            featured: true,
        }
    }

    fn valid_item() -> OrderItem {
        OrderItem {
            product_id: "abc".to_string(),
            title: "AeroFlex Tee".to_string(),
            price: 29.99,
            quantity: 1,
            color: None,
            size: None,
            image: None,
        }
    }

    #[test]
    fn test_valid_product_passes() {
        assert!(valid_product().validate().is_ok());
    }

    #[test]
    fn test_negative_price_fails_validation() {
        let product = NewProduct {
            price: -1.0,
            ..valid_product()
        };
        let err = product.validate().unwrap_err();
        assert!(err.field_errors().contains_key("price"));
    }

    #[test]
    fn test_empty_title_fails_validation() {
        let product = NewProduct {
            title: String::new(),
            ..valid_product()
        };
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_rating_out_of_range_fails_validation() {
        let product = NewProduct {
            rating: Some(5.5),
            ..valid_product()
        };
        assert!(product.validate().is_err());

        let product = NewProduct {
            rating: None,
            ..valid_product()
        };
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_order_requires_items() {
        let order = Order {
            items: vec![],
            subtotal: 0.0,
            shipping: 0.0,
            total: 0.0,
            customer_name: None,
            customer_email: None,
            address: None,
        };
        let err = order.validate().unwrap_err();
        assert!(err.field_errors().contains_key("items"));
    }

    #[test]
    fn test_order_item_quantity_must_be_positive() {
        let item = OrderItem {
            quantity: 0,
            ..valid_item()
        };
        assert!(item.validate().is_err());

        let order = Order {
            items: vec![OrderItem {
                quantity: 0,
                ..valid_item()
            }],
            subtotal: 29.99,
            shipping: 5.0,
            total: 34.99,
            customer_name: None,
            customer_email: None,
            address: None,
        };
        // Nested validation surfaces item errors on the order
        assert!(order.validate().is_err());
    }

    #[test]
    fn test_order_rejects_negative_totals() {
        let order = Order {
            items: vec![valid_item()],
            subtotal: 29.99,
            shipping: -5.0,
            total: 24.99,
            customer_name: None,
            customer_email: None,
            address: None,
        };
        assert!(order.validate().is_err());
    }

    #[test]
    fn test_user_age_bounds() {
        let user = User {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            address: "1 Main St".to_string(),
            age: Some(121),
            is_active: true,
        };
        assert!(user.validate().is_err());

        let user = User {
            age: Some(120),
            ..user
        };
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_from_document_promotes_id() {
        let oid = ObjectId::new();
        let document = doc! {
            "_id": oid,
            "title": "Contour Jeans",
            "description": "Slim-fit stretch denim",
            "price": 59.0,
            "category": "Bottoms",
            "featured": true,
        };

        let product = Product::from_document(document).unwrap();
        assert_eq!(product.id, oid.to_hex());
        assert_eq!(product.title, "Contour Jeans");
        // Defaults fill fields the document omits
        assert!(product.in_stock);
        assert!(product.images.is_empty());
        assert_eq!(product.rating, None);
    }

    #[test]
    fn test_from_document_id_never_leaks() {
        let document = doc! {
            "_id": ObjectId::new(),
            "title": "Nimbus Hoodie",
            "price": 49.5,
            "category": "Outerwear",
        };

        let product = Product::from_document(document).unwrap();
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("id").is_some());
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn test_from_document_without_id_fails() {
        let document = doc! {
            "title": "Stride Sneakers",
            "price": 79.0,
            "category": "Footwear",
        };
        assert!(Product::from_document(document).is_err());
    }
}
