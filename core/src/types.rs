//! Domain DTOs for the product API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates. Every
//! field but the id defaults when the backend omits it.

use serde::{Deserialize, Serialize};

/// Id given to the placeholder product substituted for an empty body.
pub const PLACEHOLDER_PRODUCT_ID: i64 = 1;

/// A product as served by the backend. Immutable once received.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(rename = "productId")]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "imageUrlList", default)]
    pub image_urls: Vec<String>,
}

impl Product {
    /// The product returned for a successful "get by id" with no body.
    ///
    /// Callers cannot tell it apart from a real product with id 1; see
    /// DESIGN.md.
    pub fn placeholder() -> Self {
        Self {
            id: PLACEHOLDER_PRODUCT_ID,
            ..Self::default()
        }
    }
}

/// Products whose name contains `query`, ignoring case and surrounding
/// whitespace. A blank query keeps every product.
pub fn filter_by_name<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.iter().collect();
    }
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}
