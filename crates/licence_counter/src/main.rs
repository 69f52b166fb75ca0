mod application;
mod cli;
mod config;
mod domain;
mod errors;
mod gui;
mod service;
mod utils;

use std::path::PathBuf;

use clap::Parser;

use application::{KeyCounts, LicenceCounter};
use cli::Cli;
use config::{Config, ConfigReloader};
use gui::CounterApp;
use service::SmbExplorer;
use utils::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logging::init_logging(&cli.log_level)?;

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.headless {
        let counts = count_keys(config);
        println!("actual: {}", counts.actual);
        println!("activated: {}", counts.activated);
        return Ok(());
    }

    let window = config.window().clone();
    let refresh = refresh_action(cli.config.clone(), config);
    if let Err(e) = gui::run(CounterApp::new(window, refresh)) {
        tracing::error!("Failed to run window: {}", e);
        return Err(e.into());
    }

    Ok(())
}

fn count_keys(config: Config) -> KeyCounts {
    let explorer = SmbExplorer::new(config.file_server().clone());
    LicenceCounter::new(config, explorer).count()
}

/// Refresh callback for the window
///
/// The configuration file is read again on every press so edits apply
/// without a restart.
fn refresh_action(config_path: PathBuf, initial: Config) -> Box<dyn FnMut() -> KeyCounts> {
    let mut reloader = ConfigReloader::new(config_path, initial);
    Box::new(move || count_keys(reloader.reload().clone()))
}
