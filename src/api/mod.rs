//! # REST client for the flasky backend
//!
//! A single [`ApiClient`] holds the configured base URL and one
//! `reqwest::Client` whose default headers carry
//! `Content-Type: application/json`. Requests are grouped by resource:
//!
//! - [`ApiClient::products`]: `GET /products`, `POST /products`
//! - [`ApiClient::orders`]: `GET /orders`, `POST /orders`, `GET /orders/{id}`,
//!   `POST /orders/{id}/items`, `POST /orders/{id}/pay`
//!
//! Failures are handed back to the caller untouched: no retries and no
//! reinterpretation of the backend's status codes.

mod orders;
mod products;

pub use orders::OrdersApi;
pub use products::ProductsApi;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::ErrorBody;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Request to backend failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Human-readable message for display. For backend failures this is the
    /// `error` field of the response body when present, else the raw body.
    pub fn message(&self) -> String {
        match self {
            ApiError::Status { status, body } => {
                if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
                    return parsed.error;
                }
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("Request failed")
                        .to_string()
                } else {
                    trimmed.to_string()
                }
            }
            other => other.to_string(),
        }
    }

    /// Backend status code, if the failure was a non-2xx response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// HTTP client bound to one backend base URL.
///
/// Cheap to clone: clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client for `base_url` (e.g. `http://localhost:3000/api`).
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(self)
    }

    pub fn orders(&self) -> OrdersApi<'_> {
        OrdersApi::new(self)
    }

    /// Append path segments to the base URL. Each segment is percent-encoded
    /// on its own, so an id can never introduce extra path components.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Only fails for cannot-be-a-base URLs, which `new` rejects.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub(crate) fn get(&self, segments: &[&str]) -> RequestBuilder {
        self.http.get(self.endpoint(segments))
    }

    pub(crate) fn post(&self, segments: &[&str]) -> RequestBuilder {
        self.http.post(self.endpoint(segments))
    }

    /// Send one request and decode a 2xx JSON body into `T`.
    pub(crate) async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();
        debug!("{} {}", method, url);

        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("{} {} returned {}", method, url, status);
            return Err(ApiError::Status { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_segments_to_base_path() {
        let client = ApiClient::new("http://localhost:3000/api").unwrap();
        assert_eq!(
            client.endpoint(&["orders", "42", "items"]).as_str(),
            "http://localhost:3000/api/orders/42/items"
        );
    }

    #[test]
    fn endpoint_tolerates_trailing_slash_and_bare_host() {
        let slashed = ApiClient::new("https://shop.example.com/api/").unwrap();
        assert_eq!(
            slashed.endpoint(&["products"]).as_str(),
            "https://shop.example.com/api/products"
        );

        let bare = ApiClient::new("http://10.0.0.5:8000").unwrap();
        assert_eq!(
            bare.endpoint(&["orders"]).as_str(),
            "http://10.0.0.5:8000/orders"
        );
    }

    #[test]
    fn endpoint_encodes_ids_as_single_segment() {
        let client = ApiClient::new("http://localhost:3000/api").unwrap();
        assert_eq!(
            client.endpoint(&["orders", "a/b"]).as_str(),
            "http://localhost:3000/api/orders/a%2Fb"
        );
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(matches!(
            ApiClient::new("localhost:3000/api"),
            Err(ApiError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            ApiClient::new("ftp://files.example.com"),
            Err(ApiError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn message_prefers_backend_error_field() {
        let err = ApiError::Status {
            status: StatusCode::BAD_REQUEST,
            body: r#"{"error": "Order already paid"}"#.to_string(),
        };
        assert_eq!(err.message(), "Order already paid");
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));

        let empty = ApiError::Status {
            status: StatusCode::NOT_FOUND,
            body: String::new(),
        };
        assert_eq!(empty.message(), "Not Found");
    }
}
