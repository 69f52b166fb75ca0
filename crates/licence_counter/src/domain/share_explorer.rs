use crate::{domain::SharedFile, errors::LicenceCounterResult};

/// Domain trait for browsing a remote file share
///
/// Abstracts the network client so the counting logic can be exercised
/// without a live server.
pub trait ShareExplorer {
    /// List the entries of a directory on a share
    ///
    /// A session is opened for the call and closed before it returns,
    /// whatever the outcome.
    ///
    /// # Arguments
    /// * `service_name` - The share name on the server
    /// * `path` - Directory path inside the share
    ///
    /// # Returns
    /// * `Ok(Vec<SharedFile>)` - Directory entries in server order
    /// * `Err(LicenceCounterError)` - If the session cannot be opened or the path cannot be listed
    fn list_path(&self, service_name: &str, path: &str) -> LicenceCounterResult<Vec<SharedFile>>;
}
