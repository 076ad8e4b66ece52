//! Folder lookup records.

/// A mailbox folder, as much of one as contact operations need.
///
/// Folder lifecycle is handled elsewhere; this is a lookup record for
/// resolving move targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    id: String,
    name: String,
    path: String,
}

impl Folder {
    /// Creates a folder record.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            path: path.into(),
        }
    }

    /// Server-assigned folder id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Leaf name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute `/`-separated path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}
