use derive_getters::Getters;

/// A single entry returned by a share directory listing
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SharedFile {
    filename: String,
    is_directory: bool,
}

impl SharedFile {
    pub fn file(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            is_directory: false,
        }
    }

    pub fn directory(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            is_directory: true,
        }
    }

    /// Literal, case-sensitive suffix match on the filename
    pub fn has_postfix(&self, postfix: &str) -> bool {
        self.filename.ends_with(postfix)
    }
}
