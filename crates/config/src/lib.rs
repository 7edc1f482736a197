//! Client configuration loaded from TOML.

mod config;
mod errors;
mod network;

pub use config::{ClientConfig, LoggingConfig};
pub use errors::ConfigError;
pub use network::RoochNetwork;
