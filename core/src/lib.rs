//! Typed access to a storefront's product backend.
//!
//! # Overview
//! `ProductRepository` is the entry point. Each of its operations calls the
//! backend once through a `ProductApi` and returns an `ApiResult`: either
//! the payload or an error message with an optional HTTP status. Faults never
//! escape the repository as `Err` or panics.
//!
//! # Design
//! - `ProductEndpoints` builds `HttpRequest` values as plain data; a
//!   `Transport` executes them. `HttpProductApi` glues the two and decodes
//!   JSON bodies.
//! - `ProductApi` is a trait so the repository can be driven by a fake in
//!   tests or by another client entirely.
//! - Successful responses without a body are replaced by a per-type default
//!   (`EmptyBody`) instead of being reported as errors.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod repository;
pub mod result;
pub mod transport;
pub mod types;

pub use client::{HttpProductApi, ProductApi, RawResponse};
pub use config::ClientConfig;
pub use endpoints::ProductEndpoints;
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use repository::{EmptyBody, Operation, ProductRepository};
pub use result::{ApiFailure, ApiResult};
pub use transport::{ReqwestTransport, Transport};
pub use types::{filter_by_name, Product};
