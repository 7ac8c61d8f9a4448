// ── Session token ──
//
// The router's only notion of authentication state is the PHPSESSID
// cookie handed out at login. The token carries no expiry; the firmware
// invalidates it server-side and the client only learns by a request
// failing. This module just models the value — the lifecycle lives on
// `CodaClient`.

use std::fmt;

/// Opaque session credential: the `PHPSESSID` cookie value returned by a
/// successful login, sent back on every authenticated request.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `Cookie` header value for an authenticated request.
    pub(crate) fn cookie_header(&self) -> String {
        format!("PHPSESSID={}", self.0)
    }
}

// Session ids are credentials; keep them out of logs.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_header_uses_phpsessid() {
        let token = SessionToken::new("abc123");
        assert_eq!(token.cookie_header(), "PHPSESSID=abc123");
    }

    #[test]
    fn debug_does_not_leak_value() {
        let token = SessionToken::new("s3cret");
        assert_eq!(format!("{token:?}"), "SessionToken(..)");
    }
}
