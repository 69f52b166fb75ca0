pub mod share_explorer;
pub mod shared_file;

pub use share_explorer::ShareExplorer;
pub use shared_file::SharedFile;
