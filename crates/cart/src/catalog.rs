//! Stock-and-product catalog access.
//!
//! The catalog is the remote authority for stock levels and base product
//! data. The cart never caches stock: every mutation re-fetches the live
//! level, so a stale session cannot oversell. Lookup failures are not
//! differentiated by cause - a 404, a transport error, and a malformed
//! body all abort the current operation the same way.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;
use url::Url;

use shoebox_core::{ProductId, ProductRecord, StockLevel};

/// Errors from catalog lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog returned a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Response body did not parse.
    #[error("json parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Capability to fetch live stock and base product data.
#[allow(async_fn_in_trait)]
pub trait Catalog {
    /// Fetch the current stock level for a product.
    async fn stock_level(&self, id: ProductId) -> Result<StockLevel, CatalogError>;

    /// Fetch the base product record for a product.
    async fn product(&self, id: ProductId) -> Result<ProductRecord, CatalogError>;
}

/// HTTP client for the catalog REST API.
///
/// `GET {base}/stock/{id}` and `GET {base}/products/{id}`. No request
/// timeout is configured: an in-flight operation runs to completion or
/// failure.
#[derive(Clone)]
pub struct HttpCatalog {
    inner: Arc<HttpCatalogInner>,
}

struct HttpCatalogInner {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCatalog {
    /// Create a new catalog client for the given API base URL.
    #[must_use]
    pub fn new(base_url: &Url) -> Self {
        let endpoint = base_url.as_str().trim_end_matches('/').to_string();
        Self {
            inner: Arc::new(HttpCatalogInner {
                client: reqwest::Client::new(),
                endpoint,
            }),
        }
    }

    /// Fetch a path and parse the JSON body.
    ///
    /// Body is read as text first so parse failures can be logged with the
    /// offending payload.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}/{path}", self.inner.endpoint);

        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                status = %status,
                url = %url,
                body = %body.chars().take(200).collect::<String>(),
                "catalog returned non-success status"
            );
            return Err(CatalogError::Status { status, url });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                url = %url,
                body = %body.chars().take(200).collect::<String>(),
                "failed to parse catalog response"
            );
            CatalogError::Parse(e)
        })
    }
}

impl Catalog for HttpCatalog {
    #[instrument(skip(self))]
    async fn stock_level(&self, id: ProductId) -> Result<StockLevel, CatalogError> {
        self.get_json(&format!("stock/{id}")).await
    }

    #[instrument(skip(self))]
    async fn product(&self, id: ProductId) -> Result<ProductRecord, CatalogError> {
        self.get_json(&format!("products/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_trims_trailing_slash() {
        let with_slash = HttpCatalog::new(&Url::parse("http://localhost:3333/").expect("valid url"));
        let without = HttpCatalog::new(&Url::parse("http://localhost:3333").expect("valid url"));
        assert_eq!(with_slash.inner.endpoint, "http://localhost:3333");
        assert_eq!(without.inner.endpoint, "http://localhost:3333");
    }

    #[test]
    fn status_error_names_url() {
        let err = CatalogError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
            url: "http://localhost:3333/stock/9".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unexpected status 404 Not Found from http://localhost:3333/stock/9"
        );
    }
}
