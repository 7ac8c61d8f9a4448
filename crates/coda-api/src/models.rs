// Wire types for the router's JSON responses.
//
// Fields use `#[serde(rename)]` for the firmware's camel/snake mix and
// `#[serde(default)]` liberally because the firmware is inconsistent
// about field presence across versions.

use serde::Deserialize;

/// Response body of `GET /1/Device/Hosts`.
///
/// `Hosts_List` is deliberately required: an expired session gets a 200
/// whose body is some other JSON document, and that must fail decoding
/// rather than read as "zero hosts".
#[derive(Debug, Deserialize)]
pub struct HostsResponse {
    #[serde(rename = "Hosts_List")]
    pub hosts: Vec<HostEntry>,
}

/// One connected host as reported by the router.
///
/// The firmware reports every ARP/DHCP entry it knows about, including
/// ones with no hardware address (`macAddr: null`); callers are expected
/// to drop those. Extra fields (ip, lease time, port) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct HostEntry {
    #[serde(rename = "macAddr", default)]
    pub mac_addr: Option<String>,
    #[serde(rename = "hostName", default)]
    pub host_name: String,
}
