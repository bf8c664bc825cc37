//! The remote data client contract and its HTTP implementation.
//!
//! # Design
//! `ProductApi` is the replaceable collaborator the repository is built on.
//! It reports what the transport saw (`RawResponse`: status plus optional
//! decoded body) and leaves the meaning of success to the caller. `Err` is
//! reserved for faults that prevented a response from being obtained or
//! decoded.
//!
//! `HttpProductApi` composes `ProductEndpoints` with a `Transport`. Bodies
//! are decoded only for 2xx responses. An absent or blank body and a JSON
//! `null` both decode to `None`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::endpoints::ProductEndpoints;
use crate::error::ClientError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::Product;

/// A transport-level response: status code and the body, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse<T> {
    pub status: u16,
    pub body: Option<T>,
}

impl<T> RawResponse<T> {
    pub fn new(status: u16, body: Option<T>) -> Self {
        Self { status, body }
    }

    /// True for any 2xx status.
    pub fn is_successful(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fixed contract to the product backend.
#[async_trait]
pub trait ProductApi: Send + Sync {
    async fn get_all_products(&self) -> Result<RawResponse<Vec<Product>>, ClientError>;

    async fn get_product_by_id(&self, id: i64) -> Result<RawResponse<Product>, ClientError>;

    async fn get_image_urls(&self, id: i64) -> Result<RawResponse<Vec<String>>, ClientError>;

    async fn get_image_url(&self, id: i64) -> Result<RawResponse<String>, ClientError>;

    async fn get_products_by_category(
        &self,
        category: &str,
    ) -> Result<RawResponse<Vec<Product>>, ClientError>;
}

/// `ProductApi` over HTTP: builds requests with `ProductEndpoints` and runs
/// them through `T`.
#[derive(Debug, Clone)]
pub struct HttpProductApi<T> {
    endpoints: ProductEndpoints,
    transport: T,
}

impl<T: Transport> HttpProductApi<T> {
    pub fn new(endpoints: ProductEndpoints, transport: T) -> Self {
        Self {
            endpoints,
            transport,
        }
    }

    async fn fetch<B: DeserializeOwned>(
        &self,
        request: HttpRequest,
    ) -> Result<RawResponse<B>, ClientError> {
        tracing::debug!(method = request.method.as_str(), url = %request.url, "sending request");
        let response = self.transport.execute(request).await?;
        tracing::debug!(
            status = response.status,
            content_type = response.header("content-type").unwrap_or("-"),
            "received response"
        );
        decode(response)
    }
}

impl HttpProductApi<ReqwestTransport> {
    /// The production stack: `reqwest` transport against `config.base_url`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let endpoints = ProductEndpoints::new(&config.base_url)?;
        let transport = ReqwestTransport::from_config(config)?;
        Ok(Self::new(endpoints, transport))
    }
}

#[async_trait]
impl<T: Transport> ProductApi for HttpProductApi<T> {
    async fn get_all_products(&self) -> Result<RawResponse<Vec<Product>>, ClientError> {
        self.fetch(self.endpoints.build_list_products()).await
    }

    async fn get_product_by_id(&self, id: i64) -> Result<RawResponse<Product>, ClientError> {
        self.fetch(self.endpoints.build_get_product(id)).await
    }

    async fn get_image_urls(&self, id: i64) -> Result<RawResponse<Vec<String>>, ClientError> {
        self.fetch(self.endpoints.build_list_image_urls(id)).await
    }

    async fn get_image_url(&self, id: i64) -> Result<RawResponse<String>, ClientError> {
        self.fetch(self.endpoints.build_get_image_url(id)).await
    }

    async fn get_products_by_category(
        &self,
        category: &str,
    ) -> Result<RawResponse<Vec<Product>>, ClientError> {
        self.fetch(self.endpoints.build_list_by_category(category)).await
    }
}

/// Turn an `HttpResponse` into a `RawResponse`, decoding 2xx bodies as JSON.
fn decode<B: DeserializeOwned>(response: HttpResponse) -> Result<RawResponse<B>, ClientError> {
    if !response.is_success() {
        return Ok(RawResponse::new(response.status, None));
    }
    let body = match response.body.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(text) => serde_json::from_str::<Option<B>>(text)?,
    };
    Ok(RawResponse::new(response.status, body))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Replays one canned response and records the request it was given.
    struct CannedTransport {
        response: Result<HttpResponse, ()>,
        seen: Mutex<Vec<HttpRequest>>,
    }

    impl CannedTransport {
        fn new(status: u16, body: Option<&str>) -> Self {
            Self {
                response: Ok(HttpResponse {
                    status,
                    headers: Vec::new(),
                    body: body.map(str::to_string),
                }),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                response: Err(()),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Transport for CannedTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
            self.seen.lock().unwrap().push(request);
            self.response
                .clone()
                .map_err(|()| ClientError::Transport("connection refused".to_string()))
        }
    }

    fn api(transport: CannedTransport) -> HttpProductApi<CannedTransport> {
        let endpoints = ProductEndpoints::new("http://localhost:3000").unwrap();
        HttpProductApi::new(endpoints, transport)
    }

    #[tokio::test]
    async fn list_products_decodes_body() {
        let api = api(CannedTransport::new(
            200,
            Some(r#"[{"productId":1,"name":"Air Runner","brand":"Stride","price":89.99,"category":"Shoes","imageUrlList":[]}]"#),
        ));
        let raw = api.get_all_products().await.unwrap();
        assert!(raw.is_successful());
        let products = raw.body.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Air Runner");
    }

    #[tokio::test]
    async fn requests_hit_the_operation_endpoint() {
        let api = api(CannedTransport::new(200, Some("[]")));
        api.get_products_by_category("Bags").await.unwrap();
        api.get_image_urls(9).await.unwrap();

        let seen = api.transport.seen.lock().unwrap();
        assert_eq!(seen[0].url, "http://localhost:3000/products/category/Bags");
        assert_eq!(seen[1].url, "http://localhost:3000/products/9/images");
    }

    #[tokio::test]
    async fn missing_body_is_none() {
        let raw = api(CannedTransport::new(200, None))
            .get_all_products()
            .await
            .unwrap();
        assert_eq!(raw.status, 200);
        assert!(raw.body.is_none());
    }

    #[tokio::test]
    async fn blank_and_null_bodies_are_none() {
        let raw = api(CannedTransport::new(200, Some("  \n")))
            .get_image_url(1)
            .await
            .unwrap();
        assert!(raw.body.is_none());

        let raw = api(CannedTransport::new(200, Some("null")))
            .get_product_by_id(1)
            .await
            .unwrap();
        assert!(raw.body.is_none());
    }

    #[tokio::test]
    async fn single_url_is_a_json_string() {
        let raw = api(CannedTransport::new(200, Some(r#""https://cdn.example.com/1.jpg""#)))
            .get_image_url(1)
            .await
            .unwrap();
        assert_eq!(raw.body.as_deref(), Some("https://cdn.example.com/1.jpg"));
    }

    #[tokio::test]
    async fn error_status_is_data_not_error() {
        let raw = api(CannedTransport::new(404, Some(r#"{"error":"not found"}"#)))
            .get_product_by_id(5)
            .await
            .unwrap();
        assert!(!raw.is_successful());
        assert_eq!(raw.status, 404);
        assert!(raw.body.is_none());
    }

    #[tokio::test]
    async fn malformed_success_body_is_deserialization_error() {
        let err = api(CannedTransport::new(200, Some("not json")))
            .get_all_products()
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Deserialization(_)));
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        let err = api(CannedTransport::failing())
            .get_image_urls(1)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }

    #[test]
    fn raw_response_success_range() {
        assert!(RawResponse::<()>::new(201, None).is_successful());
        assert!(!RawResponse::<()>::new(500, None).is_successful());
    }
}
