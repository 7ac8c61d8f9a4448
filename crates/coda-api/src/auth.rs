// Router authentication
//
// Credential login against the CODA firmware's fixed endpoint. The
// firmware takes the credentials as a form field named `model` whose
// value is a JSON document, and signals success solely by setting the
// `PHPSESSID` cookie — a rejected login still answers HTTP 200, just
// without the cookie.

use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::debug;

use crate::client::CodaClient;
use crate::error::Error;
use crate::session::SessionToken;

impl CodaClient {
    /// Authenticate with the router using username/password.
    ///
    /// `POST /1/Device/Users/Login` with form field
    /// `model` = `{"username": .., "password": ..}` (JSON-in-form, the
    /// firmware's convention). On success the token is stored on the
    /// client and returned; a new login always overwrites the old token.
    ///
    /// Inputs are only checked for presence — the firmware dictates any
    /// further format rules.
    pub async fn login(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<SessionToken, Error> {
        if username.is_empty() || password.expose_secret().is_empty() {
            return Err(Error::Authentication {
                message: "username and password must be non-empty".into(),
            });
        }

        debug!("logging in at {}", self.login_url());

        let model = json!({
            "username": username,
            "password": password.expose_secret(),
        });
        let form = [("model", model.to_string())];

        let resp = self
            .http()
            .post(self.login_url().clone())
            .form(&form)
            .send()
            .await
            .map_err(|e| Error::from_reqwest(e, self.timeout_secs()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
            });
        }

        // A 200 without the session cookie is how the firmware says
        // "wrong credentials".
        let token = resp
            .cookies()
            .find(|c| c.name() == "PHPSESSID")
            .map(|c| SessionToken::new(c.value()))
            .ok_or_else(|| Error::Authentication {
                message: "login response carried no session token".into(),
            })?;

        self.set_token(token.clone());
        debug!("login successful");
        Ok(token)
    }
}
