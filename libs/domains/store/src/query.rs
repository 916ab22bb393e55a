//! Query/filter engine for product browsing.
//!
//! Splits a browse request into two passes: an exact-match filter pushed
//! down to the store, and an in-process substring search over the results.
//! The store filter has no text-search capability in scope, and keeping
//! the text pass separate lets the same logic run without a store.

use mongodb::bson::{Document, doc};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::models::Product;

/// Optional browse parameters for product listing.
///
/// Each parameter is independent; unknown query parameters are ignored.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ProductQuery {
    /// Free-text search over title and description
    pub q: Option<String>,
    /// Exact category match
    pub category: Option<String>,
    /// Exact featured-flag match
    pub featured: Option<bool>,
}

/// Build the store-level exact-match filter from the supplied parameters.
///
/// Absent parameters impose no constraint; an empty filter returns the
/// whole collection.
pub fn build_filter(params: &ProductQuery) -> Document {
    let mut filter = doc! {};

    if let Some(ref category) = params.category {
        filter.insert("category", category);
    }

    if let Some(featured) = params.featured {
        filter.insert("featured", featured);
    }

    filter
}

/// Case-insensitive substring match over title and description.
///
/// A missing description is treated as empty text. The empty query matches
/// every product (the empty substring is in every title); that behavior is
/// part of the contract and must not be special-cased away.
pub fn matches_text(product: &Product, query: &str) -> bool {
    let needle = query.to_lowercase();

    product.title.to_lowercase().contains(&needle)
        || product
            .description
            .as_deref()
            .unwrap_or_default()
            .to_lowercase()
            .contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(title: &str, description: Option<&str>) -> Product {
        Product {
            id: "0".repeat(24),
            title: title.to_string(),
            description: description.map(str::to_string),
            price: 10.0,
            category: "Tops".to_string(),
            in_stock: true,
            image: None,
            images: vec![],
            colors: vec![],
            sizes: vec![],
            rating: None,
            featured: false,
        }
    }

    #[test]
    fn test_build_filter_empty() {
        let filter = build_filter(&ProductQuery::default());
        assert!(filter.is_empty());
    }

    #[test]
    fn test_build_filter_with_category() {
        let params = ProductQuery {
            category: Some("Tops".to_string()),
            ..Default::default()
        };
        let filter = build_filter(&params);
        assert_eq!(filter.get_str("category").unwrap(), "Tops");
        assert!(!filter.contains_key("featured"));
    }

    #[test]
    fn test_build_filter_with_featured() {
        let params = ProductQuery {
            featured: Some(false),
            ..Default::default()
        };
        let filter = build_filter(&params);
        assert_eq!(filter.get_bool("featured").unwrap(), false);
    }

    #[test]
    fn test_build_filter_with_both() {
        let params = ProductQuery {
            q: Some("tee".to_string()),
            category: Some("Tops".to_string()),
            featured: Some(true),
        };
        let filter = build_filter(&params);
        assert_eq!(filter.len(), 2);
        // The text query never reaches the store filter
        assert!(!filter.contains_key("q"));
    }

    #[test]
    fn test_matches_text_is_case_insensitive() {
        let p = product("AeroFlex Tee", Some("Breathable performance tee"));
        assert!(matches_text(&p, "aeroflex"));
        assert!(matches_text(&p, "TEE"));
        assert!(!matches_text(&p, "denim"));
    }

    #[test]
    fn test_matches_text_searches_description() {
        let p = product("Contour Jeans", Some("Slim-fit stretch denim"));
        assert!(matches_text(&p, "denim"));
        assert!(matches_text(&p, "Slim"));
    }

    #[test]
    fn test_matches_text_missing_description() {
        let p = product("Nimbus Hoodie", None);
        assert!(matches_text(&p, "hoodie"));
        assert!(!matches_text(&p, "fleece"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let with_description = product("Stride Sneakers", Some("Lightweight"));
        let without_description = product("Stride Sneakers", None);
        assert!(matches_text(&with_description, ""));
        assert!(matches_text(&without_description, ""));
    }
}
