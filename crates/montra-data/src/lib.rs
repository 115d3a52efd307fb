//! HTTP fetch client for Montra's static catalog document.
//!
//! One concern: a single GET of a JSON document, deserialized into the
//! caller's type. The client is generic over the payload so it carries no
//! domain knowledge of its own.
//!
//! # Example
//!
//! ```rust,ignore
//! use montra_data::FetchClient;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Catalog {
//!     categories: Vec<serde_json::Value>,
//!     products: Vec<serde_json::Value>,
//! }
//!
//! let client = FetchClient::new()?;
//! let catalog: Catalog = client.get_json("https://shop.example/catalog.json").await?;
//! ```

mod error;

pub use error::LoadError;

use std::time::Duration;

use serde::de::DeserializeOwned;

/// Default total timeout for a fetch.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Async JSON fetch client.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: reqwest::Client,
}

impl FetchClient {
    /// Create a client with the default timeout.
    pub fn new() -> Result<Self, LoadError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit total timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LoadError::Connection(e.to_string()))?;
        Ok(Self { client })
    }

    /// GET `url` and deserialize the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, LoadError> {
        tracing::debug!(url, "fetching document");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LoadError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::Connection(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| LoadError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Doc {
        name: String,
    }

    #[tokio::test]
    async fn test_get_json_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/doc.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name": "ok"}"#)
            .create_async()
            .await;

        let client = FetchClient::new().unwrap();
        let doc: Doc = client
            .get_json(&format!("{}/doc.json", server.url()))
            .await
            .unwrap();

        assert_eq!(doc.name, "ok");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_http_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/doc.json")
            .with_status(500)
            .create_async()
            .await;

        let client = FetchClient::new().unwrap();
        let result = client
            .get_json::<Doc>(&format!("{}/doc.json", server.url()))
            .await;

        assert!(matches!(result, Err(LoadError::Http { status: 500, .. })));
    }

    #[tokio::test]
    async fn test_invalid_json_is_parse_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/doc.json")
            .with_status(200)
            .with_body("not json at all")
            .create_async()
            .await;

        let client = FetchClient::new().unwrap();
        let result = client
            .get_json::<Doc>(&format!("{}/doc.json", server.url()))
            .await;

        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[tokio::test]
    async fn test_missing_key_is_parse_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/doc.json")
            .with_status(200)
            .with_body(r#"{"other": 1}"#)
            .create_async()
            .await;

        let client = FetchClient::new().unwrap();
        let result = client
            .get_json::<Doc>(&format!("{}/doc.json", server.url()))
            .await;

        assert!(matches!(result, Err(LoadError::Parse(_))));
    }
}
