//! Resilient request client
//!
//! Wraps a [`Transport`] with the endpoint fail-over protocol and the typed
//! user operations. The rules, in call order:
//!
//! 1. Try the preferred address first (`standby` when `prefer_standby` is
//!    set, otherwise `active`).
//! 2. A transport-level failure with an untried alternate triggers exactly
//!    one retry against it. A second transport failure surfaces unmodified.
//! 3. Any HTTP response, 2xx through 5xx, means the address is reachable and
//!    is never retried.
//! 4. Whichever address served the request is recorded: a non-active server
//!    is promoted and the loser dropped for the lifetime of the client.

use reqwest::Method;
use serde_json::Value;

use crate::endpoint::EndpointPair;
use crate::error::{ApiError, ApiResult};
use crate::transport::{HttpTransport, Transport};
use crate::types::{CreateUserPayload, User};

/// Byte budget for the response excerpt carried in `RequestFailed`.
const BODY_EXCERPT_LIMIT: usize = 4096;

/// HTTP client for the users service with endpoint fail-over.
pub struct ApiClient<T = HttpTransport> {
    endpoints: EndpointPair,
    transport: T,
}

impl ApiClient<HttpTransport> {
    /// Create a client from a configured base address.
    ///
    /// Fails only on a malformed address — the one fatal startup error.
    pub fn new(raw_url: &str) -> ApiResult<Self> {
        Ok(Self {
            endpoints: EndpointPair::resolve(raw_url)?,
            transport: HttpTransport::new(),
        })
    }
}

impl<T: Transport> ApiClient<T> {
    /// Create a client over an explicit endpoint pair and transport.
    pub fn with_transport(endpoints: EndpointPair, transport: T) -> Self {
        Self {
            endpoints,
            transport,
        }
    }

    /// Current endpoint state.
    #[must_use]
    pub fn endpoints(&self) -> &EndpointPair {
        &self.endpoints
    }

    /// The underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Issue a request, failing over to the alternate endpoint at most once.
    pub async fn send(
        &mut self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> ApiResult<(u16, String)> {
        let first = self.endpoints.first_choice().to_string();

        let err = match self.transport.request(&first, method.clone(), path, body).await {
            Ok(response) => {
                self.endpoints.mark_served(&first);
                return Ok(response);
            }
            Err(e) => e,
        };

        if !err.is_transport_level() {
            return Err(err);
        }

        let Some(alternate) = self.endpoints.alternate(&first) else {
            return Err(err);
        };

        log::warn!("{first} unreachable ({err}), retrying against {alternate}");

        let response = self.transport.request(&alternate, method, path, body).await?;
        self.endpoints.mark_served(&alternate);
        Ok(response)
    }

    /// `GET /users`
    pub async fn list_users(&mut self) -> ApiResult<Vec<User>> {
        let (status, body) = self.send(Method::GET, "/users", None).await?;

        if status == 404 {
            return Err(ApiError::NotFound);
        }
        if !is_success(status) {
            return Err(request_failed(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `POST /users`
    pub async fn create_user(&mut self, payload: &CreateUserPayload) -> ApiResult<User> {
        let payload_json = serde_json::to_value(payload)
            .map_err(|e| ApiError::Validation(format!("failed to encode payload: {e}")))?;

        let (status, body) = self.send(Method::POST, "/users", Some(&payload_json)).await?;

        if !is_success(status) {
            return Err(request_failed(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `DELETE /users/{id}`
    pub async fn delete_user(&mut self, id: &str) -> ApiResult<()> {
        if id.trim().is_empty() {
            return Err(ApiError::Validation("user id is required".into()));
        }

        let path = format!("/users/{}", urlencoding::encode(id));
        let (status, body) = self.send(Method::DELETE, &path, None).await?;

        if status == 404 {
            return Err(ApiError::NotFound);
        }
        if !is_success(status) {
            return Err(request_failed(status, &body));
        }

        Ok(())
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn request_failed(status: u16, body: &str) -> ApiError {
    ApiError::RequestFailed {
        status,
        body: excerpt(body),
    }
}

/// Trim and truncate a response body to the display budget, on a char boundary.
fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.len() <= BODY_EXCERPT_LIMIT {
        return trimmed.to_string();
    }
    let mut end = BODY_EXCERPT_LIMIT;
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    trimmed[..end].to_string()
}
