//! HTTP transport seam
//!
//! The fail-over algorithm in [`crate::client`] only needs "send this request
//! to that base address and tell me what happened". Putting that behind a
//! trait keeps the algorithm testable with a scripted transport and no
//! sockets.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};

use crate::error::{ApiError, ApiResult};

/// Connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
/// Per-call deadline (seconds). Exceeding it reads as a transport-level
/// failure for fail-over purposes.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 8;

/// One HTTP exchange against an explicit base address.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue `method path` against `base`, returning status and body text.
    ///
    /// Errors are transport-level only ([`ApiError::Transport`] or
    /// [`ApiError::Timeout`]); any HTTP response, whatever its status,
    /// comes back as `Ok`.
    async fn request(
        &self,
        base: &str,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> ApiResult<(u16, String)>;
}

/// Production transport backed by `reqwest`.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the default timeout configuration.
    #[must_use]
    pub fn new() -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        base: &str,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> ApiResult<(u16, String)> {
        let url = format!("{base}{path}");
        log::debug!("{method} {url}");

        let mut request = self
            .client
            .request(method, &url)
            .header("Accept", "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout(e.to_string())
            } else {
                ApiError::Transport(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("Response Status: {status}");

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("failed to read response body: {e}")))?;

        Ok((status, text))
    }
}
