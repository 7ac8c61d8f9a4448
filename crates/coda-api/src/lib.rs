// coda-api: Async Rust client for the Hitron CODA router's web API.

pub mod client;
pub mod error;
pub mod models;
pub mod session;
pub mod transport;

mod auth;
mod hosts;

pub use client::CodaClient;
pub use error::Error;
pub use session::SessionToken;
