// HTTP client for the Hitron CODA router's web API.
//
// Wraps `reqwest::Client` with the router's fixed endpoint layout and the
// session-cookie lifecycle. Endpoint calls (login, hosts) are implemented
// as inherent methods in separate files to keep this module focused on
// transport mechanics.

use std::sync::RwLock;

use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::session::SessionToken;
use crate::transport::TransportConfig;

/// Raw HTTP client for a single CODA router.
///
/// Holds at most one session token at a time. The token's validity is
/// never confirmed up front — the firmware gives no way to ask — so the
/// lifecycle is: absent until [`login`](Self::login) succeeds, overwritten
/// by each new login, cleared by [`invalidate_session`](Self::invalidate_session).
pub struct CodaClient {
    http: reqwest::Client,
    login_url: Url,
    hosts_url: Url,
    timeout_secs: u64,
    session: RwLock<Option<SessionToken>>,
}

impl CodaClient {
    /// Create a client for the router at `host` (address, optionally with
    /// a port — the firmware serves plain HTTP on the LAN).
    pub fn new(host: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let login_url = Url::parse(&format!("http://{host}/1/Device/Users/Login"))?;
        let hosts_url = Url::parse(&format!("http://{host}/1/Device/Hosts"))?;
        let http = transport.build_client()?;

        Ok(Self {
            http,
            login_url,
            hosts_url,
            timeout_secs: transport.timeout.as_secs(),
            session: RwLock::new(None),
        })
    }

    /// The underlying HTTP client.
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn login_url(&self) -> &Url {
        &self.login_url
    }

    pub(crate) fn hosts_url(&self) -> &Url {
        &self.hosts_url
    }

    /// Request timeout in seconds, for error reporting.
    pub(crate) fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    // ── Session token lifecycle ──────────────────────────────────────

    /// The held session token, if a login has succeeded and the token has
    /// not been invalidated since.
    pub fn current_token(&self) -> Option<SessionToken> {
        self.session.read().expect("session lock poisoned").clone()
    }

    /// Store a freshly issued token, replacing any previous one.
    pub(crate) fn set_token(&self, token: SessionToken) {
        debug!("storing session token");
        *self.session.write().expect("session lock poisoned") = Some(token);
    }

    /// Drop the held token, forcing the next authenticated call to be
    /// preceded by a fresh login.
    pub fn invalidate_session(&self) {
        debug!("invalidating session token");
        *self.session.write().expect("session lock poisoned") = None;
    }
}
