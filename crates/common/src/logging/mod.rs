//! Logging subsystem.

mod manager;
mod types;


pub use manager::{build_filter, init, try_init, LoggingError};
pub use types::{LoggerConfig, StdoutConfig};
