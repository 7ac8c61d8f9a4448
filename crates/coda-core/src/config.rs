// ── Runtime scanner configuration ──
//
// Describes *how* to reach one router. The host framework constructs a
// `ScannerConfig` programmatically and hands it in — this crate never
// reads config files, env vars, or the CLI.

use std::time::Duration;

use secrecy::SecretString;

use coda_api::transport::DEFAULT_TIMEOUT;

/// Configuration for scanning a single router.
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    /// Router address, optionally with a port (e.g., `192.168.0.1`).
    /// The firmware serves plain HTTP on the LAN.
    pub host: String,
    /// Web UI username.
    pub username: String,
    /// Web UI password.
    pub password: SecretString,
    /// Per-request timeout, applied to both login and listing calls.
    pub timeout: Duration,
}

impl ScannerConfig {
    /// Config with the reference request timeout.
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: SecretString,
    ) -> Self {
        Self {
            host: host.into(),
            username: username.into(),
            password,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
