use thiserror::Error;

/// Top-level error type for the `coda-api` crate.
///
/// Covers every failure mode of the router's web API: authentication,
/// transport, and response decoding. `coda-core` maps these into
/// consumer-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login rejected by the router, or a call was made without a session.
    ///
    /// The CODA firmware signals a rejected login by answering HTTP 200
    /// without setting the session cookie, so this variant also covers
    /// "200 but no `PHPSESSID`".
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// Request timed out before the router answered.
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Router answered with a non-success HTTP status.
    #[error("Router returned HTTP {status}")]
    Http { status: u16 },

    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Failed to parse router response: {message}")]
    Parse { message: String, body: String },
}

impl Error {
    /// Classify a `reqwest` failure, folding timeouts into [`Error::Timeout`].
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout { timeout_secs }
        } else {
            Self::Transport(err)
        }
    }

    /// Returns `true` if this is a transient error worth retrying on the
    /// next poll cycle without touching the session.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Timeout { .. } => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates the router refused the
    /// credentials or the session was never established.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }
}
