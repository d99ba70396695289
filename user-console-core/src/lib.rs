//! user-console core library
//!
//! Client-side plumbing for the user administration console:
//! - endpoint resolution with an in-cluster fallback ([`endpoint`])
//! - a resilient HTTP client with one-shot fail-over ([`client`])
//! - typed user operations and wire types ([`types`])
//!
//! The rendering layer lives in the `user-console-tui` crate; this library is
//! terminal-agnostic.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod transport;
pub mod types;

// Re-export common types
pub use client::ApiClient;
pub use endpoint::EndpointPair;
pub use error::{ApiError, ApiResult};
pub use transport::{HttpTransport, Transport};
pub use types::{CreateUserPayload, User};
