// Transport configuration for building reqwest::Client instances.
//
// The router speaks plain HTTP on the LAN, so there is no TLS knob here;
// the config carries the request timeout, which is also what the error
// type reports when that timeout fires.

use std::time::Duration;

/// Reference timeout from the CODA firmware's web UI; the router can take
/// several seconds to answer under load but never legitimately longer.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Transport configuration for building the HTTP client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent("coda-api/0.1.0")
            .build()
            .map_err(crate::error::Error::Transport)
    }
}
