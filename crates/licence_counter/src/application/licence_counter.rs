use crate::{
    config::Config,
    domain::{ShareExplorer, SharedFile},
};

/// Number of key files found in each directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyCounts {
    pub actual: usize,
    pub activated: usize,
}

/// Counts licence key files on the configured share
pub struct LicenceCounter<E: ShareExplorer> {
    config: Config,
    explorer: E,
}

impl<E: ShareExplorer> LicenceCounter<E> {
    pub fn new(config: Config, explorer: E) -> Self {
        Self { config, explorer }
    }

    /// Key files still available for activation
    pub fn get_actual_keys(&self) -> Vec<SharedFile> {
        self.list_keys(
            self.config.path().actual_keys(),
            self.config.extensions().actual(),
        )
    }

    /// Key files that have already been activated
    pub fn get_consumed_keys(&self) -> Vec<SharedFile> {
        self.list_keys(
            self.config.path().activated_keys(),
            self.config.extensions().activated(),
        )
    }

    /// Refresh both counters, one session per directory
    pub fn count(&self) -> KeyCounts {
        let actual = self.get_actual_keys().len();
        let activated = self.get_consumed_keys().len();
        tracing::info!(actual, activated, "Key counters refreshed");
        KeyCounts { actual, activated }
    }

    // Any failure counts as an empty directory.
    fn list_keys(&self, path: &str, postfix: &str) -> Vec<SharedFile> {
        let service_name = self.config.file_server().target_dir();
        match self.explorer.list_path(service_name, path) {
            Ok(content) => filter_files_by_postfix(content, postfix),
            Err(e) => {
                tracing::error!("{}", e);
                Vec::new()
            }
        }
    }
}

/// Keep the entries whose filename ends with `postfix`, preserving order
pub fn filter_files_by_postfix(files: Vec<SharedFile>, postfix: &str) -> Vec<SharedFile> {
    files
        .into_iter()
        .filter(|file| file.has_postfix(postfix))
        .collect()
}
