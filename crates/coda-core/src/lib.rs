// coda-core: Presence-scanner layer between coda-api and the polling host.

pub mod config;
pub mod error;
pub mod model;
pub mod scanner;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::ScannerConfig;
pub use error::ScanError;
pub use model::{Device, MacAddress};
pub use scanner::DeviceScanner;
