//! Vision HTTP Client
//!
//! A small, type-safe HTTP client for the Vision image backend.
//!
//! Every backend reply is wrapped in an `{ code, msg, data }` envelope; this
//! crate unwraps it and turns non-success codes into [`ClientError`]s. The
//! client also implements [`vision_core::ResultFetcher`], translating the
//! backend's "still queued" error messages into `FetchOutcome::Pending` so the
//! poller never has to look at them.
//!
//! # Example
//!
//! ```no_run
//! use vision_client::ImageClient;
//! use vision_core::dto::fusion::ImageFusionRequest;
//!
//! # async fn example() -> vision_client::Result<()> {
//! let client = ImageClient::new("http://localhost:8080").with_token("token", "eyJhbGciOi...");
//!
//! let job = client
//!     .submit_fusion(&ImageFusionRequest::new(vec![
//!         "https://oss.example.com/a.png".to_string(),
//!         "https://oss.example.com/b.png".to_string(),
//!     ]))
//!     .await?;
//!
//! println!("Submitted fusion job: {}", job.job_id);
//! # Ok(())
//! # }
//! ```

pub mod error;
mod fetcher;
mod fusion;
mod image;

// Re-export commonly used types
pub use error::{ClientError, Result};

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use vision_core::dto::envelope::ApiResponse;

/// Default header the backend reads the session token from
pub const DEFAULT_TOKEN_HEADER: &str = "token";

/// HTTP client for the Vision image backend
///
/// Endpoints are grouped by feature:
/// - Image fusion (submit, fetch result)
/// - Image-to-image generation
#[derive(Debug, Clone)]
pub struct ImageClient {
    /// Base URL of the backend (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Header name and value carrying the session token
    token: Option<(String, String)>,
}

impl ImageClient {
    /// Create a new backend client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the backend API (e.g., "http://localhost:8080")
    ///
    /// # Example
    /// ```
    /// use vision_client::ImageClient;
    ///
    /// let client = ImageClient::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new backend client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use vision_client::ImageClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(120))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = ImageClient::with_client("http://localhost:8080", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            token: None,
        }
    }

    /// Attach a session token sent in `header` on every request
    pub fn with_token(mut self, header: impl Into<String>, token: impl Into<String>) -> Self {
        self.token = Some((header.into(), token.into()));
        self
    }

    /// Get the base URL of the backend
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some((header, token)) => request.header(header.as_str(), token.as_str()),
            None => request,
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.get(self.url(path)))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.post(self.url(path)))
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and unwrap its envelope
    ///
    /// Checks the HTTP status first, then the envelope code. A successful
    /// envelope is returned whole so callers can use both `data` and `msg`.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<ApiResponse<T>> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))?;

        if !envelope.is_success() {
            let message = envelope.msg.unwrap_or_else(|| "Unknown error".to_string());
            return Err(ClientError::rejected(envelope.code, message));
        }

        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ImageClient::new("http://localhost:8080");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert!(client.token.is_none());
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = ImageClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(
            client.url("/api/image/image-fusion"),
            "http://localhost:8080/api/image/image-fusion"
        );
    }

    #[test]
    fn test_client_with_token() {
        let client = ImageClient::with_client("http://localhost:8080", Client::new())
            .with_token(DEFAULT_TOKEN_HEADER, "secret");
        assert_eq!(
            client.token,
            Some(("token".to_string(), "secret".to_string()))
        );
    }
}
