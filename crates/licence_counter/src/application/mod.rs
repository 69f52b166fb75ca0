pub mod licence_counter;

pub use licence_counter::{KeyCounts, LicenceCounter, filter_files_by_postfix};
