pub mod smb;

pub use smb::SmbExplorer;
