//! Change notifications for contacts.

use std::collections::HashMap;
use std::sync::Arc;

use mailbridge_soap::{Element, names};

use crate::error::Result;

/// A server-side contact change delta.
///
/// Each `_or` accessor returns the event's new value, or the passed-in
/// current value when the event carries no change for that field.
#[derive(Debug, Clone)]
pub struct ModifyContactEvent {
    id: String,
    folder_id: Option<String>,
    tag_ids: Option<String>,
    flags: Option<String>,
    revision: Option<String>,
    metadata_changed_date: Option<i64>,
    attrs: Option<HashMap<String, String>>,
}

impl ModifyContactEvent {
    /// Creates an empty delta targeting the given contact id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            folder_id: None,
            tag_ids: None,
            flags: None,
            revision: None,
            metadata_changed_date: None,
            attrs: None,
        }
    }

    /// Parses a delta from a `cn` element.
    ///
    /// Only `id` is required; every other field counts as changed only
    /// when present on the element. The metadata change date travels in
    /// seconds and is normalized to milliseconds here.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is absent, an attribute child has no
    /// name, or the change date is not numeric.
    pub fn parse(element: &Element) -> Result<Self> {
        let mut attrs: Option<HashMap<String, String>> = None;
        for attr_el in element.children(names::E_ATTRIBUTE) {
            let name = attr_el.attribute(names::A_ATTRIBUTE_NAME)?.to_string();
            attrs
                .get_or_insert_with(HashMap::new)
                .insert(name, attr_el.text().to_string());
        }

        Ok(Self {
            id: element.attribute(names::A_ID)?.to_string(),
            folder_id: element.attribute_opt(names::A_FOLDER).map(str::to_string),
            tag_ids: element.attribute_opt(names::A_TAGS).map(str::to_string),
            flags: element.attribute_opt(names::A_FLAGS).map(str::to_string),
            revision: element.attribute_opt(names::A_REVISION).map(str::to_string),
            metadata_changed_date: element
                .attribute_long_opt(names::A_CHANGE_DATE)?
                .map(|seconds| seconds * 1000),
            attrs,
        })
    }

    /// Sets the new folder id.
    #[must_use]
    pub fn with_folder_id(mut self, folder_id: impl Into<String>) -> Self {
        self.folder_id = Some(folder_id.into());
        self
    }

    /// Sets the new tag id list.
    #[must_use]
    pub fn with_tag_ids(mut self, tag_ids: impl Into<String>) -> Self {
        self.tag_ids = Some(tag_ids.into());
        self
    }

    /// Sets the new flags bitstring.
    #[must_use]
    pub fn with_flags(mut self, flags: impl Into<String>) -> Self {
        self.flags = Some(flags.into());
        self
    }

    /// Sets the new revision.
    #[must_use]
    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into());
        self
    }

    /// Sets the new metadata change date, in epoch milliseconds.
    #[must_use]
    pub const fn with_metadata_changed_date(mut self, millis: i64) -> Self {
        self.metadata_changed_date = Some(millis);
        self
    }

    /// Sets the replacement attribute mapping.
    #[must_use]
    pub fn with_attrs(mut self, attrs: HashMap<String, String>) -> Self {
        self.attrs = Some(attrs);
        self
    }

    /// Target contact id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// New folder id, or `current` when unchanged.
    #[must_use]
    pub fn folder_id_or(&self, current: Option<String>) -> Option<String> {
        self.folder_id.clone().or(current)
    }

    /// New tag id list, or `current` when unchanged.
    #[must_use]
    pub fn tag_ids_or(&self, current: Option<String>) -> Option<String> {
        self.tag_ids.clone().or(current)
    }

    /// New flags bitstring, or `current` when unchanged.
    #[must_use]
    pub fn flags_or(&self, current: Option<String>) -> Option<String> {
        self.flags.clone().or(current)
    }

    /// New revision, or `current` when unchanged.
    #[must_use]
    pub fn revision_or(&self, current: Option<String>) -> Option<String> {
        self.revision.clone().or(current)
    }

    /// New metadata change date, or `current` when unchanged.
    #[must_use]
    pub const fn metadata_changed_date_or(&self, current: i64) -> i64 {
        match self.metadata_changed_date {
            Some(millis) => millis,
            None => current,
        }
    }

    /// New attribute mapping, or `current` when unchanged.
    #[must_use]
    pub fn attrs_or(&self, current: Arc<HashMap<String, String>>) -> Arc<HashMap<String, String>> {
        self.attrs
            .as_ref()
            .map_or(current, |attrs| Arc::new(attrs.clone()))
    }
}
