//! SMB share access backed by libsmbclient through `pavao`.

use pavao::{SmbClient, SmbCredentials, SmbDirentType, SmbOptions};

use crate::{
    config::FileServerConfig,
    domain::{ShareExplorer, SharedFile},
    errors::{LicenceCounterError, LicenceCounterResult},
};

/// Creates SMB sessions and lists share directories
#[derive(Debug, Clone)]
pub struct SmbExplorer {
    server: FileServerConfig,
}

impl SmbExplorer {
    pub fn new(server: FileServerConfig) -> Self {
        Self { server }
    }

    /// Server URL in the form libsmbclient expects
    pub fn server_url(&self) -> String {
        format!("smb://{}:{}", self.server.ip_address(), self.server.port())
    }

    fn create_connection(&self, service_name: &str) -> LicenceCounterResult<SmbClient> {
        let mut credentials = SmbCredentials::default()
            .server(self.server_url())
            .share(share_path(service_name))
            .username(self.server.username())
            .password(self.server.password());
        if !self.server.workgroup().is_empty() {
            credentials = credentials.workgroup(self.server.workgroup());
        }

        tracing::debug!(
            server = %self.server_url(),
            share = service_name,
            client = %self.server.client_machine_name(),
            "Opening SMB session"
        );

        SmbClient::new(credentials, SmbOptions::default().one_share_per_server(true)).map_err(|e| {
            LicenceCounterError::ShareConnection {
                server: self.server_url(),
                message: e.to_string(),
            }
        })
    }
}

impl ShareExplorer for SmbExplorer {
    fn list_path(&self, service_name: &str, path: &str) -> LicenceCounterResult<Vec<SharedFile>> {
        let client = self.create_connection(service_name)?;
        let remote_path = directory_path(path);

        // The session is released when `client` drops at the end of this scope.
        let entries = client
            .list_dir(&remote_path)
            .map_err(|e| LicenceCounterError::ShareListing {
                service: service_name.to_string(),
                path: remote_path.clone(),
                message: e.to_string(),
            })?;

        let files = to_shared_files(
            entries
                .iter()
                .map(|entry| (entry.name(), entry.get_type())),
        );

        tracing::debug!(
            share = service_name,
            path = %remote_path,
            entries = files.len(),
            "Listed share directory"
        );

        Ok(files)
    }
}

/// Convert raw listing entries, dropping `.` and `..` and keeping server order
fn to_shared_files<'a>(
    entries: impl IntoIterator<Item = (&'a str, SmbDirentType)>,
) -> Vec<SharedFile> {
    entries
        .into_iter()
        .filter(|(name, _)| *name != "." && *name != "..")
        .map(|(name, kind)| match kind {
            SmbDirentType::Dir => SharedFile::directory(name),
            _ => SharedFile::file(name),
        })
        .collect()
}

/// Share name as an absolute path
fn share_path(service_name: &str) -> String {
    format!("/{}", service_name.trim_matches(|c| c == '/' || c == '\\'))
}

/// Directory path inside the share with forward slashes and a leading `/`
fn directory_path(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    let trimmed = normalized.trim_matches('/');
    format!("/{}", trimmed)
}
