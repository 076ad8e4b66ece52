//! Tag lookup records.

/// A mailbox tag.
///
/// Tag lifecycle is handled elsewhere; this is a lookup record for
/// resolving tag-by-name operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    id: String,
    name: String,
}

impl Tag {
    /// Creates a tag record.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Server-assigned tag id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
