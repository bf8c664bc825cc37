use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, catalogue_of, Product};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- list ---

#[tokio::test]
async fn list_products_returns_seed_in_id_order() {
    let resp = app().oneshot(get("/products")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let products: Vec<Product> = body_json(resp).await;
    let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn list_products_empty_catalogue() {
    let resp = app_with(catalogue_of(Vec::new()))
        .oneshot(get("/products"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let products: Vec<Product> = body_json(resp).await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn products_use_camel_case_wire_names() {
    let resp = app().oneshot(get("/products/1")).await.unwrap();

    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["productId"], 1);
    assert_eq!(body["name"], "Air Runner");
    assert!(body["imageUrlList"].is_array());
}

// --- get by id ---

#[tokio::test]
async fn get_product_found() {
    let resp = app().oneshot(get("/products/2")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let product: Product = body_json(resp).await;
    assert_eq!(product.name, "Trail Blazer");
    assert_eq!(product.price, Some(129.5));
}

#[tokio::test]
async fn get_product_not_found() {
    let resp = app().oneshot(get("/products/999")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_product_bad_id_returns_400() {
    let resp = app().oneshot(get("/products/not-a-number")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- images ---

#[tokio::test]
async fn list_image_urls_for_product() {
    let resp = app().oneshot(get("/products/1/images")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let urls: Vec<String> = body_json(resp).await;
    assert_eq!(urls.len(), 2);
    assert!(urls[0].ends_with("/1/front.jpg"));
}

#[tokio::test]
async fn list_image_urls_unknown_product() {
    let resp = app().oneshot(get("/products/999/images")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_image_url_returns_first_image() {
    let resp = app().oneshot(get("/products/1/image")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let url: String = body_json(resp).await;
    assert_eq!(url, "https://cdn.example.com/products/1/front.jpg");
}

#[tokio::test]
async fn get_image_url_without_images_is_null() {
    let resp = app().oneshot(get("/products/4/image")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], b"null");
}

// --- category ---

#[tokio::test]
async fn list_by_category_filters() {
    let resp = app().oneshot(get("/products/category/Shoes")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let products: Vec<Product> = body_json(resp).await;
    assert_eq!(products.len(), 2);
    assert!(products.iter().all(|p| p.category == "Shoes"));
}

#[tokio::test]
async fn list_by_category_decodes_percent_encoded_segment() {
    let resp = app()
        .oneshot(get("/products/category/Men's%20Hats"))
        .await
        .unwrap();

    let products: Vec<Product> = body_json(resp).await;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, 4);
}

#[tokio::test]
async fn list_by_unknown_category_is_empty() {
    let resp = app().oneshot(get("/products/category/Garden")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let products: Vec<Product> = body_json(resp).await;
    assert!(products.is_empty());
}
