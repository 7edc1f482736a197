//! Configuration types for the logging subsystem.

use tracing_subscriber::fmt::format::FmtSpan;

/// Configuration for the stdout/stderr logging layer
#[derive(Debug, Clone)]
pub struct StdoutConfig {
    /// Use JSON format instead of compact format
    pub json_format: bool,
    /// Span events to log (ENTER, EXIT, CLOSE, etc.)
    pub fmt_span: FmtSpan,
    /// Write to stderr instead of stdout
    pub use_stderr: bool,
}

impl Default for StdoutConfig {
    fn default() -> Self {
        Self {
            json_format: false,
            fmt_span: FmtSpan::NONE,
            use_stderr: false,
        }
    }
}

/// Main logger configuration
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Name reported in the startup event.
    pub service_name: String,
    /// Stdout logging configuration
    pub stdout_config: StdoutConfig,
    /// Extra filter directives applied on top of `RUST_LOG`, like
    /// `rooch_crypto=debug`.
    pub directives: Vec<String>,
}

impl LoggerConfig {
    pub fn new(service_name: String) -> Self {
        Self {
            service_name,
            stdout_config: StdoutConfig::default(),
            directives: Vec::new(),
        }
    }

    /// Enable JSON logging format
    pub fn with_json_logging(mut self, enabled: bool) -> Self {
        self.stdout_config.json_format = enabled;
        self
    }

    /// Configure which span events to log
    pub fn with_fmt_span(mut self, fmt_span: FmtSpan) -> Self {
        self.stdout_config.fmt_span = fmt_span;
        self
    }

    /// Send output to stderr, keeping stdout for command results.
    pub fn with_stderr(mut self, enabled: bool) -> Self {
        self.stdout_config.use_stderr = enabled;
        self
    }

    pub fn add_directive(mut self, directive: &str) -> Self {
        self.directives.push(directive.to_owned());
        self
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new("(rooch-service)".to_string())
    }
}
