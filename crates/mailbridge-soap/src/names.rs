//! Wire element and attribute names.
//!
//! These short names are the server's wire contract and are kept
//! byte-for-byte; nothing here is meant to be human-readable.

/// Item id.
pub const A_ID: &str = "id";
/// Id of the canonical contact a derived contact overlays.
pub const A_REF: &str = "ref";
/// Containing folder id.
pub const A_FOLDER: &str = "l";
/// Flags bitstring.
pub const A_FLAGS: &str = "f";
/// Comma-separated tag ids.
pub const A_TAGS: &str = "t";
/// Item revision.
pub const A_REVISION: &str = "rev";
/// Item date, epoch milliseconds.
pub const A_DATE: &str = "d";
/// Metadata change date, epoch seconds.
pub const A_CHANGE_DATE: &str = "md";

/// Contact element.
pub const E_CONTACT: &str = "cn";
/// Contact attribute element.
pub const E_ATTRIBUTE: &str = "a";
/// Attribute name.
pub const A_ATTRIBUTE_NAME: &str = "n";
/// Attachment part reference.
pub const A_PART: &str = "part";
/// Attachment file name.
pub const A_CONTENT_FILENAME: &str = "filename";
/// Attachment content type.
pub const A_CONTENT_TYPE: &str = "ct";
/// Attachment size in bytes.
pub const A_SIZE: &str = "s";

/// Contact group member element.
pub const E_CONTACT_GROUP_MEMBER: &str = "m";
/// Group member value (member id or inline email address).
pub const A_MEMBER_VALUE: &str = "value";
/// Group member type code.
pub const A_MEMBER_TYPE: &str = "type";

/// Contact action request root.
pub const E_CONTACT_ACTION_REQUEST: &str = "ContactActionRequest";
/// Action element inside an action request.
pub const E_ACTION: &str = "action";
/// Action operation code.
pub const A_OPERATION: &str = "op";
/// Tag id on a tag action.
pub const A_TAG: &str = "tag";

/// Contact modification request root.
pub const E_MODIFY_CONTACT_REQUEST: &str = "ModifyContactRequest";
/// Replace-versus-merge switch on a modify request.
pub const A_REPLACE: &str = "replace";

/// Device unmapping request root.
pub const E_DELETE_DEVICE_REQUEST: &str = "DeleteDeviceRequest";
/// Device element.
pub const E_DEVICE: &str = "device";

/// Draft save request root.
pub const E_SAVE_DRAFT_REQUEST: &str = "SaveDraftRequest";
/// Message element.
pub const E_MSG: &str = "m";
/// Message content element.
pub const E_CONTENT: &str = "content";
/// Id of the message being replied to or forwarded.
pub const A_ORIG_ID: &str = "origid";
/// Reply type: `r` for reply, `w` for forward.
pub const A_REPLY_TYPE: &str = "rt";
/// Composing identity id.
pub const A_IDENTITY_ID: &str = "idnt";
/// Scheduled auto-send time, epoch milliseconds.
pub const A_AUTO_SEND_TIME: &str = "autoSendTime";
