//! Vigil HTTP Client
//!
//! A small, type-safe client for the status queries of the managed
//! text-classification service.
//!
//! Every call uses the service's JSON target-header protocol: a `POST` to the
//! base URL with an `X-Amz-Target` header naming the operation and a JSON body.
//! Request signing is not handled here; point the client at a signing proxy or
//! a compatible endpoint.
//!
//! # Example
//!
//! ```no_run
//! use vigil_client::{ClassificationClient, OperationStatusLookup};
//! use vigil_core::domain::{OperationHandle, OperationKind};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ClassificationClient::new("http://localhost:4566");
//!     let lookup = OperationStatusLookup::new(client, OperationKind::Endpoint);
//!
//!     let handle = OperationHandle::new("arn:aws:comprehend:us-east-1:123456789012:document-classifier-endpoint/news")?;
//!     let outcome = vigil_poller::wait(&handle, &lookup, &OperationKind::Endpoint.default_policy()).await?;
//!
//!     println!("endpoint {}", outcome);
//!     Ok(())
//! }
//! ```

pub mod error;
mod classifiers;
mod endpoints;
mod jobs;
mod lookup;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use lookup::OperationStatusLookup;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use vigil_core::domain::{OperationHandle, OperationKind, StatusSnapshot};
use vigil_core::dto::StatusReport;

/// Prefix of the `X-Amz-Target` header value
const TARGET_PREFIX: &str = "Comprehend_20171127";

/// Content type of the JSON target-header protocol
const JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// HTTP client for the classification service
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ClassificationClient {
    /// Base URL of the service (e.g., "https://comprehend.us-east-1.amazonaws.com")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl ClassificationClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the service
    ///
    /// # Example
    /// ```
    /// use vigil_client::ClassificationClient;
    ///
    /// let client = ClassificationClient::new("http://localhost:4566");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use vigil_client::ClassificationClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = ClassificationClient::with_client("http://localhost:4566", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the current status of any supported operation kind
    ///
    /// # Returns
    /// The reported status and the service's optional message
    pub async fn describe_status(
        &self,
        kind: OperationKind,
        handle: &OperationHandle,
    ) -> Result<(StatusSnapshot, Option<String>)> {
        let id = handle.as_str();
        match kind {
            OperationKind::Training => {
                let response = self.describe_document_classifier(id).await?;
                Ok(status_of(&response))
            }
            OperationKind::Endpoint => {
                let response = self.describe_endpoint(id).await?;
                Ok(status_of(&response))
            }
            OperationKind::BatchJob => {
                let response = self.describe_document_classification_job(id).await?;
                Ok(status_of(&response))
            }
        }
    }

    // =============================================================================
    // Request Dispatch
    // =============================================================================

    /// Invoke a service operation with a JSON body
    async fn call<Req, Resp>(&self, operation: &str, body: &Req) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body)
            .map_err(|e| ClientError::InvalidRequest(format!("Failed to encode {}: {}", operation, e)))?;

        debug!("Calling {}.{}", TARGET_PREFIX, operation);

        let response = self
            .client
            .post(&self.base_url)
            .header("X-Amz-Target", format!("{}.{}", TARGET_PREFIX, operation))
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(payload)
            .send()
            .await?;

        self.handle_response(response).await
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::from_body(status.as_u16(), &error_text));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

fn status_of<R: StatusReport>(response: &R) -> (StatusSnapshot, Option<String>) {
    (
        response.status().clone(),
        response.message().map(str::to_string),
    )
}
