use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(rename = "productId")]
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub price: Option<f64>,
    pub category: String,
    #[serde(rename = "imageUrlList")]
    pub image_urls: Vec<String>,
}

/// Products keyed by id. A `BTreeMap` keeps list responses in id order.
pub type Catalogue = Arc<BTreeMap<i64, Product>>;

fn product(
    id: i64,
    name: &str,
    brand: &str,
    price: Option<f64>,
    category: &str,
    image_urls: &[&str],
) -> Product {
    Product {
        id,
        name: name.to_string(),
        brand: brand.to_string(),
        price,
        category: category.to_string(),
        image_urls: image_urls.iter().map(|u| u.to_string()).collect(),
    }
}

/// The products every fresh `app()` starts with.
pub fn seed_products() -> Vec<Product> {
    vec![
        product(
            1,
            "Air Runner",
            "Stride",
            Some(89.99),
            "Shoes",
            &[
                "https://cdn.example.com/products/1/front.jpg",
                "https://cdn.example.com/products/1/side.jpg",
            ],
        ),
        product(
            2,
            "Trail Blazer",
            "Summit",
            Some(129.5),
            "Shoes",
            &["https://cdn.example.com/products/2/front.jpg"],
        ),
        product(
            3,
            "Canvas Tote",
            "Northline",
            Some(24.0),
            "Bags",
            &["https://cdn.example.com/products/3/front.jpg"],
        ),
        product(4, "Wool Beanie", "Northline", None, "Men's Hats", &[]),
    ]
}

pub fn seeded_catalogue() -> Catalogue {
    catalogue_of(seed_products())
}

pub fn catalogue_of(products: Vec<Product>) -> Catalogue {
    Arc::new(products.into_iter().map(|p| (p.id, p)).collect())
}

pub fn app() -> Router {
    app_with(seeded_catalogue())
}

pub fn app_with(catalogue: Catalogue) -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/{id}", get(get_product))
        .route("/products/{id}/images", get(list_image_urls))
        .route("/products/{id}/image", get(get_image_url))
        .route("/products/category/{category}", get(list_by_category))
        .with_state(catalogue)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_products(State(db): State<Catalogue>) -> Json<Vec<Product>> {
    Json(db.values().cloned().collect())
}

async fn get_product(
    State(db): State<Catalogue>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, StatusCode> {
    db.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn list_image_urls(
    State(db): State<Catalogue>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<String>>, StatusCode> {
    db.get(&id)
        .map(|p| Json(p.image_urls.clone()))
        .ok_or(StatusCode::NOT_FOUND)
}

/// Serves the first image. A product without images answers `200` with a
/// `null` body.
async fn get_image_url(
    State(db): State<Catalogue>,
    Path(id): Path<i64>,
) -> Result<Json<Option<String>>, StatusCode> {
    db.get(&id)
        .map(|p| Json(p.image_urls.first().cloned()))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_by_category(
    State(db): State<Catalogue>,
    Path(category): Path<String>,
) -> Json<Vec<Product>> {
    Json(
        db.values()
            .filter(|p| p.category == category)
            .cloned()
            .collect(),
    )
}
