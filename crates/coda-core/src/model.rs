// ── Domain model ──
//
// MacAddress and Device are the scanner's entire vocabulary. The host
// framework diffs successive scans keyed on MAC, so Device equality and
// hashing go by MAC alone.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use coda_api::models::HostEntry;

// ── MacAddress ──────────────────────────────────────────────────────

/// Hardware address, normalized to uppercase colon-separated form
/// (`AA:BB:CC:DD:EE:FF`) — the convention the router's UI itself uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MacAddress(String);

impl MacAddress {
    /// Create a normalized MAC address from a colon- or dash-separated
    /// string. Normalization uppercases and swaps dashes for colons; it
    /// does not insert separators into bare hex.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let normalized = raw.as_ref().to_uppercase().replace('-', ":");
        Self(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MacAddress {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

// ── Device ──────────────────────────────────────────────────────────

/// One network-attached host reported by the router: a MAC and a display
/// hostname (which the firmware may leave empty). Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub mac: MacAddress,
    pub name: String,
}

impl Device {
    /// Normalize a wire entry into a `Device`.
    ///
    /// Returns `None` for entries without a hardware address — the
    /// firmware reports stale DHCP leases with `macAddr: null` and those
    /// carry no identity worth tracking.
    pub fn from_host(entry: HostEntry) -> Option<Self> {
        let mac = MacAddress::new(entry.mac_addr?);
        Some(Self {
            mac,
            name: entry.host_name,
        })
    }
}

// Identity is the MAC; hostnames change across DHCP leases.
impl PartialEq for Device {
    fn eq(&self, other: &Self) -> bool {
        self.mac == other.mac
    }
}

impl Eq for Device {}

impl Hash for Device {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.mac.hash(state);
    }
}
