use std::borrow::Cow;

/// Errors surfaced while initializing the logging system.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A global subscriber was already installed.
    #[error("Subscriber error: {source}")]
    Subscriber {
        #[from]
        source: tracing_subscriber::util::TryInitError,
    },
    /// The rolling file appender could not be constructed.
    #[error("Appender error: {source}")]
    Appender {
        #[from]
        source: tracing_appender::rolling::InitError,
    },
    /// An env-filter directive failed to parse.
    #[error("Filter error: {source}")]
    Filter {
        #[from]
        source: tracing_subscriber::filter::ParseError,
    },
    /// Builder settings that cannot produce a working logger.
    #[error("Invalid logger configuration: {message}")]
    InvalidConfiguration { message: Cow<'static, str> },
    /// Filesystem failures while preparing the log directory.
    #[error("Logger I/O error: {message}")]
    Io { message: String },
}
