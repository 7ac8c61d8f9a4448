// ── Consumer-facing error types ──
//
// Errors the polling host sees from a failed refresh. These mirror the
// transport-layer taxonomy but stay free of reqwest types; the
// `From<coda_api::Error>` impl does the translation.

use thiserror::Error;

/// Unified error type for the scanner.
///
/// Every variant is recoverable at refresh granularity: a failed refresh
/// leaves the previous snapshot intact, and the host's next scheduled
/// poll is the retry mechanism.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Router request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Router returned HTTP {status}")]
    Http { status: u16 },

    #[error("Could not parse router response: {message}")]
    Parse { message: String },

    #[error("Cannot reach router: {message}")]
    ConnectionFailed { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl From<coda_api::Error> for ScanError {
    fn from(err: coda_api::Error) -> Self {
        match err {
            coda_api::Error::Authentication { message } => {
                ScanError::AuthenticationFailed { message }
            }
            coda_api::Error::Timeout { timeout_secs } => ScanError::Timeout { timeout_secs },
            coda_api::Error::Http { status } => ScanError::Http { status },
            coda_api::Error::Parse { message, body: _ } => ScanError::Parse { message },
            coda_api::Error::Transport(e) => ScanError::ConnectionFailed {
                message: e.to_string(),
            },
            coda_api::Error::InvalidUrl(e) => ScanError::Config {
                message: format!("invalid router address: {e}"),
            },
        }
    }
}
