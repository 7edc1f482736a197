//! Logging initialization.

use std::io;

use thiserror::Error;
use tracing::*;
use tracing_subscriber::{
    fmt::layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use super::types::LoggerConfig;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid filter directive '{0}'")]
    InvalidDirective(String),

    #[error("global subscriber already installed: {0}")]
    AlreadyInitialized(String),
}

/// Builds the filter used by [`init`]. Defaults to `INFO`, overridable by
/// `RUST_LOG`, with the configured directives added last.
pub fn build_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggingError> {
    let mut filt = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();
    for directive in &config.directives {
        let parsed = directive
            .parse()
            .map_err(|_| LoggingError::InvalidDirective(directive.clone()))?;
        filt = filt.add_directive(parsed);
    }
    Ok(filt)
}

fn stdout_layer(
    config: &LoggerConfig,
    filt: EnvFilter,
) -> Box<dyn Layer<Registry> + Send + Sync + 'static> {
    let stdout = &config.stdout_config;
    match (stdout.json_format, stdout.use_stderr) {
        (true, true) => layer()
            .json()
            .with_writer(io::stderr)
            .with_span_events(stdout.fmt_span.clone())
            .with_filter(filt)
            .boxed(),
        (true, false) => layer()
            .json()
            .with_span_events(stdout.fmt_span.clone())
            .with_filter(filt)
            .boxed(),
        (false, true) => layer()
            .compact()
            .with_writer(io::stderr)
            .with_span_events(stdout.fmt_span.clone())
            .with_filter(filt)
            .boxed(),
        (false, false) => layer()
            .compact()
            .with_span_events(stdout.fmt_span.clone())
            .with_filter(filt)
            .boxed(),
    }
}

/// Installs the global subscriber, failing if one is already set.
pub fn try_init(config: &LoggerConfig) -> Result<(), LoggingError> {
    let filt = build_filter(config)?;
    tracing_subscriber::registry()
        .with(stdout_layer(config, filt))
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

    info!(
        service_name = %config.service_name,
        json = config.stdout_config.json_format,
        "logging initialized"
    );
    Ok(())
}

/// Initializes the logging subsystem with the provided config.
///
/// # Panics
///
/// Panics if a global subscriber is already installed or a configured
/// directive does not parse. Use [`try_init`] to handle those cases.
pub fn init(config: LoggerConfig) {
    if let Err(e) = try_init(&config) {
        panic!("init: failed to initialize logging: {e}");
    }
}
