// Connected-hosts endpoint
//
// The firmware's ARP/DHCP table, served as JSON. Requires a session
// cookie from a prior login.

use reqwest::header;
use tracing::debug;

use crate::client::CodaClient;
use crate::error::Error;
use crate::models::{HostEntry, HostsResponse};

impl CodaClient {
    /// List the hosts the router currently knows about.
    ///
    /// `GET /1/Device/Hosts` with the held session cookie. Fails with
    /// [`Error::Authentication`] if no login has happened yet; a timeout
    /// or HTTP failure does NOT clear the token, since neither proves the
    /// session itself is dead.
    pub async fn list_hosts(&self) -> Result<Vec<HostEntry>, Error> {
        let token = self.current_token().ok_or_else(|| Error::Authentication {
            message: "not logged in".into(),
        })?;

        debug!("GET {}", self.hosts_url());

        let resp = self
            .http()
            .get(self.hosts_url().clone())
            .header(header::COOKIE, token.cookie_header())
            .send()
            .await
            .map_err(|e| Error::from_reqwest(e, self.timeout_secs()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        let parsed: HostsResponse = serde_json::from_str(&body).map_err(|e| {
            let preview = preview(&body);
            Error::Parse {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.clone(),
            }
        })?;

        Ok(parsed.hosts)
    }
}

/// First ~200 bytes of a body for error messages, clamped back to a
/// char boundary so multibyte content cannot panic the slice.
fn preview(body: &str) -> &str {
    let mut end = body.len().min(200);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
