//! Draft save request.
//!
//! Saving folder/tags/flags happens server-side after the draft content
//! is stored; the content is kept even if that second step fails.

use crate::element::Element;
use crate::error::Result;
use crate::names;

use super::{Request, expect_name};

/// Draft payload carried by a [`SaveDraftRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftMessage {
    /// Id of an existing draft being updated, if any.
    pub id: Option<String>,
    /// Id of the message being replied to or forwarded, if any.
    pub origin_id: Option<String>,
    /// Reply type: `r` for reply, `w` for forward.
    pub reply_type: Option<String>,
    /// Identity used to compose the message.
    pub identity_id: Option<String>,
    /// Destination folder; the server defaults to the Drafts folder.
    pub folder_id: Option<String>,
    /// Flags bitstring.
    pub flags: Option<String>,
    /// Comma-separated tag ids.
    pub tag_ids: Option<String>,
    /// Epoch millis at which the server should send the draft itself.
    pub auto_send_time: Option<i64>,
    /// Plain-text content.
    pub content: Option<String>,
}

impl DraftMessage {
    /// Creates an empty draft payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the `m` element for this payload.
    #[must_use]
    pub fn to_element(&self) -> Element {
        let mut element = Element::new(names::E_MSG);
        if let Some(id) = &self.id {
            element.set_attribute(names::A_ID, id.as_str());
        }
        if let Some(origin_id) = &self.origin_id {
            element.set_attribute(names::A_ORIG_ID, origin_id.as_str());
        }
        if let Some(reply_type) = &self.reply_type {
            element.set_attribute(names::A_REPLY_TYPE, reply_type.as_str());
        }
        if let Some(identity_id) = &self.identity_id {
            element.set_attribute(names::A_IDENTITY_ID, identity_id.as_str());
        }
        if let Some(folder_id) = &self.folder_id {
            element.set_attribute(names::A_FOLDER, folder_id.as_str());
        }
        if let Some(flags) = &self.flags {
            element.set_attribute(names::A_FLAGS, flags.as_str());
        }
        if let Some(tag_ids) = &self.tag_ids {
            element.set_attribute(names::A_TAGS, tag_ids.as_str());
        }
        if let Some(auto_send_time) = self.auto_send_time {
            element.set_attribute(names::A_AUTO_SEND_TIME, auto_send_time.to_string());
        }
        if let Some(content) = &self.content {
            element.add_child(Element::new(names::E_CONTENT).with_text(content.as_str()));
        }
        element
    }

    /// Reads a payload back from an `m` element.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric attribute carries a non-numeric
    /// value.
    pub fn from_element(element: &Element) -> Result<Self> {
        Ok(Self {
            id: element.attribute_opt(names::A_ID).map(str::to_string),
            origin_id: element.attribute_opt(names::A_ORIG_ID).map(str::to_string),
            reply_type: element.attribute_opt(names::A_REPLY_TYPE).map(str::to_string),
            identity_id: element.attribute_opt(names::A_IDENTITY_ID).map(str::to_string),
            folder_id: element.attribute_opt(names::A_FOLDER).map(str::to_string),
            flags: element.attribute_opt(names::A_FLAGS).map(str::to_string),
            tag_ids: element.attribute_opt(names::A_TAGS).map(str::to_string),
            auto_send_time: element.attribute_long_opt(names::A_AUTO_SEND_TIME)?,
            content: element.child(names::E_CONTENT).map(|c| c.text().to_string()),
        })
    }
}

/// Saves a draft message; the payload is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveDraftRequest {
    msg: Option<DraftMessage>,
}

impl SaveDraftRequest {
    /// Creates a request carrying the given draft payload.
    #[must_use]
    pub fn new(msg: DraftMessage) -> Self {
        Self { msg: Some(msg) }
    }

    /// Creates a request with no payload.
    #[must_use]
    pub const fn empty() -> Self {
        Self { msg: None }
    }

    /// The draft payload, if any.
    #[must_use]
    pub const fn msg(&self) -> Option<&DraftMessage> {
        self.msg.as_ref()
    }
}

impl Request for SaveDraftRequest {
    const NAME: &'static str = names::E_SAVE_DRAFT_REQUEST;

    fn serialize(&self) -> Element {
        let mut root = Element::new(Self::NAME);
        if let Some(msg) = &self.msg {
            root.add_child(msg.to_element());
        }
        root
    }

    fn deserialize(element: &Element) -> Result<Self> {
        expect_name(element, Self::NAME)?;
        let msg = match element.child(names::E_MSG) {
            Some(child) => Some(DraftMessage::from_element(child)?),
            None => None,
        };
        Ok(Self { msg })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn serialize_with_payload() {
        let request = SaveDraftRequest::new(DraftMessage {
            id: Some("257".to_string()),
            origin_id: Some("251".to_string()),
            reply_type: Some("r".to_string()),
            folder_id: Some("6".to_string()),
            auto_send_time: Some(1_700_000_000_000),
            content: Some("hello".to_string()),
            ..DraftMessage::new()
        });

        let element = request.serialize();
        assert_eq!(element.name(), "SaveDraftRequest");
        let msg = element.child("m").unwrap();
        assert_eq!(msg.attribute_opt("id"), Some("257"));
        assert_eq!(msg.attribute_opt("origid"), Some("251"));
        assert_eq!(msg.attribute_opt("rt"), Some("r"));
        assert_eq!(msg.attribute_opt("l"), Some("6"));
        assert_eq!(msg.attribute_opt("autoSendTime"), Some("1700000000000"));
        assert_eq!(msg.child("content").unwrap().text(), "hello");
    }

    #[test]
    fn serialize_without_payload_is_bare_root() {
        let element = SaveDraftRequest::empty().serialize();
        assert_eq!(element.name(), "SaveDraftRequest");
        assert!(element.child("m").is_none());
    }

    #[test]
    fn deserialize_with_payload() {
        let element = Element::new("SaveDraftRequest").with_child(
            Element::new("m")
                .with_attribute("l", "6")
                .with_attribute("autoSendTime", "42")
                .with_child(Element::new("content").with_text("draft body")),
        );
        let request = SaveDraftRequest::deserialize(&element).unwrap();
        let msg = request.msg().unwrap();
        assert_eq!(msg.folder_id.as_deref(), Some("6"));
        assert_eq!(msg.auto_send_time, Some(42));
        assert_eq!(msg.content.as_deref(), Some("draft body"));
        assert_eq!(msg.id, None);
    }

    #[test]
    fn deserialize_without_payload() {
        let element = Element::new("SaveDraftRequest");
        let request = SaveDraftRequest::deserialize(&element).unwrap();
        assert!(request.msg().is_none());
    }
}
