/// Result type for licence counter operations
pub type LicenceCounterResult<T> = Result<T, LicenceCounterError>;

/// Errors raised while loading configuration, talking to the share or running the window
#[derive(thiserror::Error, Debug)]
pub enum LicenceCounterError {
    #[error("Failed to read configuration file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse configuration file {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Configuration validation failed: {message}")]
    ValidationError { message: String },
    #[error("Failed to connect to {server}: {message}")]
    ShareConnection { server: String, message: String },
    #[error("Failed to list {path} on share {service}: {message}")]
    ShareListing {
        service: String,
        path: String,
        message: String,
    },
    /// Logging initialization failed
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
    #[error("Window error: {0}")]
    Gui(String),
}
