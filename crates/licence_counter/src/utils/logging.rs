use tracing_subscriber::{EnvFilter, prelude::*};

use crate::errors::{LicenceCounterError, LicenceCounterResult};

/// Initialize logging to standard output
///
/// # Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error);
///   takes precedence over `default_level`
///
/// # Returns
/// - `Ok(())` if logging is successfully initialized
/// - `Err(LicenceCounterError::LoggingInitialization)` if a subscriber is already set
///   or the filter cannot be parsed
pub fn init_logging(default_level: &str) -> LicenceCounterResult<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level)
            .map_err(|e| LicenceCounterError::LoggingInitialization(e.to_string()))?,
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| LicenceCounterError::LoggingInitialization(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_setup() {
        // Only one global subscriber per process, so both cases live in one test
        let first = init_logging("info");
        assert!(first.is_ok());

        let second = init_logging("debug");
        assert!(matches!(
            second,
            Err(LicenceCounterError::LoggingInitialization(_))
        ));
    }
}
