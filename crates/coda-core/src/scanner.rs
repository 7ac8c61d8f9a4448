// ── Device scanner ──
//
// The polling core: lazy login, one listing request per refresh, and a
// replace-only snapshot of the devices seen on the last successful poll.
//
// Session validity is never confirmed up front — the firmware offers no
// way to ask — so the only re-login path is "no token held", which
// happens on first use or after an explicit `invalidate_session()`. A
// failed listing deliberately keeps the token: a timeout or a 5xx is not
// proof the session is dead, and discarding a live session on a flaky
// network would double the request load for nothing. An expired session
// that still answers 200 with a login page surfaces as `Parse` and heals
// on a later cycle once the host invalidates or the firmware 4xxes.

use std::sync::RwLock;

use secrecy::SecretString;
use tracing::{debug, info, warn};

use coda_api::{CodaClient, transport::TransportConfig};

use crate::config::ScannerConfig;
use crate::error::ScanError;
use crate::model::{Device, MacAddress};

/// Presence scanner for a single router.
///
/// Owns the session lifecycle (via [`CodaClient`]) and the device
/// snapshot. Reads never perform I/O; [`refresh`](Self::refresh) and
/// [`scan`](Self::scan) are the only operations that touch the network.
pub struct DeviceScanner {
    client: CodaClient,
    username: String,
    password: SecretString,
    /// Devices seen as of the last successful poll. Replaced wholesale on
    /// success; a failed refresh never clears or partially mutates it.
    snapshot: RwLock<Vec<Device>>,
}

impl DeviceScanner {
    /// Build a scanner and perform the eager first refresh.
    ///
    /// A failed first refresh fails construction — the host framework
    /// treats that as "scanner unavailable" rather than polling a dead
    /// endpoint forever.
    pub async fn connect(config: ScannerConfig) -> Result<Self, ScanError> {
        let transport = TransportConfig {
            timeout: config.timeout,
        };
        let client = CodaClient::new(&config.host, &transport)?;

        let scanner = Self {
            client,
            username: config.username,
            password: config.password,
            snapshot: RwLock::new(Vec::new()),
        };

        scanner.refresh().await?;
        info!("scanner initialized");
        Ok(scanner)
    }

    // ── Refresh cycle ────────────────────────────────────────────────

    /// Fetch the current host list and replace the snapshot.
    ///
    /// Logs in first if no session is held; if that login fails, the
    /// listing is never attempted. On any failure the previous snapshot
    /// stays untouched and the error describes this cycle only — the
    /// host's next scheduled poll is the retry.
    pub async fn refresh(&self) -> Result<(), ScanError> {
        if self.client.current_token().is_none() {
            debug!("no session held, logging in");
            self.client.login(&self.username, &self.password).await?;
        }

        let hosts = self.client.list_hosts().await?;

        let devices: Vec<Device> = hosts.into_iter().filter_map(Device::from_host).collect();

        debug!(devices = devices.len(), "refresh complete");
        *self.snapshot.write().expect("snapshot lock poisoned") = devices;
        Ok(())
    }

    /// Per-cycle entry point for the polling host: refresh, then return
    /// the MACs of the current snapshot.
    ///
    /// A failed refresh is logged and the previous (stale but valid)
    /// snapshot is served — the host diffs against prior knowledge, so
    /// stale data beats an empty list.
    pub async fn scan(&self) -> Vec<MacAddress> {
        if let Err(e) = self.refresh().await {
            warn!(error = %e, "refresh failed, serving previous snapshot");
        }
        self.list_devices()
    }

    // ── Snapshot reads (no I/O) ──────────────────────────────────────

    /// MACs from the current snapshot, in snapshot order.
    pub fn list_devices(&self) -> Vec<MacAddress> {
        self.snapshot
            .read()
            .expect("snapshot lock poisoned")
            .iter()
            .map(|d| d.mac.clone())
            .collect()
    }

    /// Display name of the device with the given MAC, if present in the
    /// current snapshot. Exact match against the normalized uppercase form.
    pub fn name_for(&self, mac: &str) -> Option<String> {
        self.snapshot
            .read()
            .expect("snapshot lock poisoned")
            .iter()
            .find(|d| d.mac.as_str() == mac)
            .map(|d| d.name.clone())
    }

    // ── Session control ──────────────────────────────────────────────

    /// Drop the held session token, forcing the next refresh to log in
    /// again. For hosts that conclude out-of-band that the session died.
    pub fn invalidate_session(&self) {
        self.client.invalidate_session();
    }
}
