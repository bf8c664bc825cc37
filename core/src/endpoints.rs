//! Stateless request builder for the product API.
//!
//! # Design
//! `ProductEndpoints` holds only the parsed base URL and carries no mutable
//! state between calls. Each operation has a `build_*` method producing an
//! `HttpRequest`; executing it is the transport's job. Path segments are
//! pushed through `url` so caller-supplied values (category names) are
//! percent-encoded and cannot escape their segment.

use url::Url;

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest};

/// Builds the five product endpoint requests against one base URL.
#[derive(Debug, Clone)]
pub struct ProductEndpoints {
    base_url: Url,
}

impl ProductEndpoints {
    /// Parse `base_url`. A path prefix such as `/api` is kept; a trailing
    /// slash is dropped.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "url cannot carry a path".to_string(),
            });
        }
        Ok(Self { base_url: parsed })
    }

    pub fn build_list_products(&self) -> HttpRequest {
        self.get(&["products"])
    }

    pub fn build_get_product(&self, id: i64) -> HttpRequest {
        self.get(&["products", &id.to_string()])
    }

    pub fn build_list_image_urls(&self, id: i64) -> HttpRequest {
        self.get(&["products", &id.to_string(), "images"])
    }

    pub fn build_get_image_url(&self, id: i64) -> HttpRequest {
        self.get(&["products", &id.to_string(), "image"])
    }

    pub fn build_list_by_category(&self, category: &str) -> HttpRequest {
        self.get(&["products", "category", category])
    }

    fn get(&self, segments: &[&str]) -> HttpRequest {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so the segments are editable.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        HttpRequest {
            method: HttpMethod::Get,
            url: url.into(),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }
}
