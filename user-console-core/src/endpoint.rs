//! Endpoint resolution and fail-over bookkeeping
//!
//! A single configured base address expands into an [`EndpointPair`]: the
//! primary address plus, when the address points at the in-cluster service
//! name, a loopback fallback. This lets the console run unchanged inside and
//! outside the cluster.

use url::Url;

use crate::error::{ApiError, ApiResult};

/// Base address used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Conventional in-cluster service host. Seeing it implies a local fallback.
pub const IN_CLUSTER_HOST: &str = "api-server";

/// The pair of service addresses the client fails over between.
///
/// Owned state, passed by exclusive reference into every call — never global,
/// so independent clients in tests do not interfere. Mutated only by
/// [`EndpointPair::mark_served`] on the calling path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointPair {
    /// Address tried first under normal operation.
    pub active: String,
    /// Alternate address, dropped permanently after a promotion.
    pub standby: Option<String>,
    /// The standby was proven healthy more recently than the active.
    pub prefer_standby: bool,
}

impl EndpointPair {
    /// Resolve a configured base address into an endpoint pair.
    ///
    /// Empty input selects [`DEFAULT_BASE_URL`]. A trailing slash is
    /// stripped. No network I/O happens here.
    pub fn resolve(raw: &str) -> ApiResult<Self> {
        let mut base = raw.trim().trim_end_matches('/').to_string();
        if base.is_empty() {
            base = DEFAULT_BASE_URL.to_string();
        }

        let parsed = Url::parse(&base).map_err(|e| ApiError::InvalidEndpoint(e.to_string()))?;

        let standby = match parsed.host_str() {
            Some(IN_CLUSTER_HOST) => Some(DEFAULT_BASE_URL.to_string()),
            _ => None,
        };

        Ok(Self {
            active: base,
            standby,
            prefer_standby: false,
        })
    }

    /// The address a new call should try first.
    #[must_use]
    pub fn first_choice(&self) -> &str {
        match self.standby {
            Some(ref standby) if self.prefer_standby => standby,
            _ => &self.active,
        }
    }

    /// The address not yet tried in this call, if one exists.
    #[must_use]
    pub fn alternate(&self, tried: &str) -> Option<String> {
        if tried == self.active {
            self.standby.clone()
        } else {
            Some(self.active.clone())
        }
    }

    /// Record which address ultimately served a request.
    ///
    /// A serving address other than the active one is promoted: it becomes
    /// the active address and the loser is dropped, so no further attempts
    /// ever target it. Serving on the active address just clears
    /// `prefer_standby` — the standby keeps its slot.
    pub fn mark_served(&mut self, addr: &str) {
        if addr != self.active {
            self.active = addr.to_string();
            self.standby = None;
        }
        self.prefer_standby = false;
    }
}
