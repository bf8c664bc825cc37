//! Normalizes `ProductApi` outcomes into `ApiResult`.
//!
//! # Design
//! Every operation goes through the same three-way match in `normalize`:
//! - client fault → `Error` with the fault's text and no code;
//! - non-2xx status → `Error` with the operation's fixed message and the code;
//! - 2xx → `Success`, with an absent body replaced by the payload type's
//!   `EmptyBody` value.
//!
//! Nothing is retried or cached. The repository holds no mutable state, so
//! concurrent calls are independent; dropping a returned future abandons the
//! in-flight request and produces no result.

use std::fmt;

use crate::client::{HttpProductApi, ProductApi, RawResponse};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::result::ApiResult;
use crate::transport::ReqwestTransport;
use crate::types::Product;

/// Message used when a fault renders as an empty string.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// The repository operations, each with its fixed failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    AllProducts,
    ProductById,
    ImageUrls,
    ImageUrl,
    ProductsByCategory,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::AllProducts => "get_all_products",
            Operation::ProductById => "get_product_by_id",
            Operation::ImageUrls => "get_image_urls",
            Operation::ImageUrl => "get_image_url",
            Operation::ProductsByCategory => "get_products_by_category",
        }
    }

    /// Message returned when the backend answers with a non-2xx status.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::AllProducts => "Failed to fetch all products",
            Operation::ProductById => "Failed to fetch product by id",
            Operation::ImageUrls => "Failed to fetch image urls",
            Operation::ImageUrl => "Failed to fetch image url",
            Operation::ProductsByCategory => "get product failed",
        }
    }
}

/// The value substituted when a successful response has no body.
pub trait EmptyBody {
    fn empty_body() -> Self;
}

impl<T> EmptyBody for Vec<T> {
    fn empty_body() -> Self {
        Vec::new()
    }
}

impl EmptyBody for String {
    fn empty_body() -> Self {
        String::new()
    }
}

/// A product with the sentinel id. Indistinguishable from a real product
/// with id 1.
impl EmptyBody for Product {
    fn empty_body() -> Self {
        Product::placeholder()
    }
}

/// Collapse a client outcome into an `ApiResult` for `operation`.
pub fn normalize<T, E>(operation: Operation, outcome: Result<RawResponse<T>, E>) -> ApiResult<T>
where
    T: EmptyBody,
    E: fmt::Display,
{
    let response = match outcome {
        Ok(response) => response,
        Err(fault) => {
            let mut message = fault.to_string();
            if message.is_empty() {
                message = UNKNOWN_ERROR.to_string();
            }
            tracing::warn!(operation = operation.name(), %message, "product request failed");
            return ApiResult::error(message);
        }
    };

    if !response.is_successful() {
        tracing::warn!(
            operation = operation.name(),
            status = response.status,
            "product backend returned an error status"
        );
        return ApiResult::http_error(operation.failure_message(), response.status);
    }

    match response.body {
        Some(body) => ApiResult::Success(body),
        None => {
            tracing::debug!(operation = operation.name(), "empty body, substituting default");
            ApiResult::Success(T::empty_body())
        }
    }
}

/// Product data access with uniform error normalization.
#[derive(Debug, Clone)]
pub struct ProductRepository<A> {
    api: A,
}

impl ProductRepository<HttpProductApi<ReqwestTransport>> {
    /// Repository over the production HTTP client described by `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::new(HttpProductApi::from_config(config)?))
    }
}

impl<A: ProductApi> ProductRepository<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn get_all_products(&self) -> ApiResult<Vec<Product>> {
        normalize(Operation::AllProducts, self.api.get_all_products().await)
    }

    pub async fn get_product_by_id(&self, id: i64) -> ApiResult<Product> {
        normalize(Operation::ProductById, self.api.get_product_by_id(id).await)
    }

    pub async fn get_image_urls(&self, id: i64) -> ApiResult<Vec<String>> {
        normalize(Operation::ImageUrls, self.api.get_image_urls(id).await)
    }

    pub async fn get_image_url(&self, id: i64) -> ApiResult<String> {
        normalize(Operation::ImageUrl, self.api.get_image_url(id).await)
    }

    pub async fn get_products_by_category(&self, category: &str) -> ApiResult<Vec<Product>> {
        normalize(
            Operation::ProductsByCategory,
            self.api.get_products_by_category(category).await,
        )
    }
}
