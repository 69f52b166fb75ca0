use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::errors::LicenceCounterResult;

/// Licence Counter
///
/// Counts licence key files on an SMB file share and shows the totals in a
/// small window with a refresh button.
///
/// ## Configuration
/// Reads `config.json` from the working directory unless `--config` is given:
/// ```json
/// {
///   "path": { "actual_keys": "keys/actual", "activated_keys": "keys/activated" },
///   "extensions": { "actual": ".key", "activated": ".used" },
///   "file_server": {
///     "ip_address": "10.0.0.5",
///     "target_dir": "licences",
///     "username": "reader",
///     "password": "secret",
///     "client_machine_name": "COUNTER-PC"
///   }
/// }
/// ```
///
/// ## Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
#[derive(Parser, Debug, Clone)]
#[command(name = "licence-counter")]
#[command(about = "Counts licence key files on an SMB file share")]
#[command(version)]
#[command(
    long_about = "Connects to an SMB file share, lists the actual and activated key directories, \nfilters them by file extension and displays both counts."
)]
pub struct Cli {
    /// Path to the JSON configuration file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Refresh once, print the counts to stdout and exit without opening a window
    #[arg(long)]
    pub headless: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Load and validate the configuration file named on the command line
    pub fn load_config(&self) -> LicenceCounterResult<Config> {
        let config = Config::load(&self.config)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["licence-counter"]);
        assert_eq!(cli.config, PathBuf::from("config.json"));
        assert!(!cli.headless);
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "licence-counter",
            "-c",
            "/etc/licence-counter.json",
            "--headless",
            "--log-level",
            "debug",
        ]);
        assert_eq!(cli.config, PathBuf::from("/etc/licence-counter.json"));
        assert!(cli.headless);
        assert_eq!(cli.log_level, "debug");
    }
}
