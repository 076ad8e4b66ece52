//! Contact and contact-group entities mirrored from the server.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use mailbridge_soap::{Element, names};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::event::ModifyContactEvent;
use crate::folder::Folder;
use crate::mailbox::{Mailbox, Transport};
use crate::tag::Tag;

/// Single-character contact flags; the characters are the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Contact is flagged for special attention.
    Flagged,
    /// Contact carries an attachment.
    Attachment,
}

impl Flag {
    const ALL: [Self; 2] = [Self::Flagged, Self::Attachment];

    /// Returns the wire character for this flag.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Flagged => 'f',
            Self::Attachment => 'a',
        }
    }

    /// Looks up a flag by its wire character.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.code() == code)
    }

    /// Returns the lowercase name of this flag.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Flagged => "flagged",
            Self::Attachment => "attachment",
        }
    }

    /// Renders a flags bitstring as a readable name list.
    ///
    /// Characters with no known flag pass through untranslated.
    #[must_use]
    pub fn to_name_list(flags: &str) -> String {
        let mut out = String::new();
        for code in flags.chars() {
            if !out.is_empty() {
                out.push_str(", ");
            }
            match Self::from_code(code) {
                Some(flag) => out.push_str(flag.name()),
                None => out.push(code),
            }
        }
        out
    }
}

/// How a group member is represented on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberType {
    /// A full contact owned by the mailbox.
    Contact,
    /// A contact sourced from the Global Address List.
    Gal,
    /// An inline member carrying only an email address.
    Inline,
}

impl MemberType {
    const ALL: [Self; 3] = [Self::Contact, Self::Gal, Self::Inline];

    /// Returns the one-letter wire code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Contact => "C",
            Self::Gal => "G",
            Self::Inline => "I",
        }
    }

    /// Looks up a member type by its wire code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|member| member.code() == code)
    }
}

/// Display-name formatting mode for a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileAs {
    /// `Last, First`
    LastCommaFirst,
    /// `First Last`
    FirstLast,
    /// `Company`
    Company,
    /// `Last, First (Company)`
    LastCommaFirstCompany,
    /// `First Last (Company)`
    FirstLastCompany,
    /// `Company (Last, First)`
    CompanyLastCommaFirst,
    /// `Company (First Last)`
    CompanyFirstLast,
    /// An explicitly specified display string.
    Explicit,
}

impl FileAs {
    const ALL: [Self; 8] = [
        Self::LastCommaFirst,
        Self::FirstLast,
        Self::Company,
        Self::LastCommaFirstCompany,
        Self::FirstLastCompany,
        Self::CompanyLastCommaFirst,
        Self::CompanyFirstLast,
        Self::Explicit,
    ];

    /// Returns the wire code for this mode.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::LastCommaFirst => "1",
            Self::FirstLast => "2",
            Self::Company => "3",
            Self::LastCommaFirstCompany => "4",
            Self::FirstLastCompany => "5",
            Self::CompanyLastCommaFirst => "6",
            Self::CompanyFirstLast => "7",
            Self::Explicit => "8",
        }
    }

    /// Looks up a mode by its wire code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.code() == code)
    }
}

/// Metadata for a contact attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentInfo {
    part: String,
    file_name: Option<String>,
    content_type: Option<String>,
    length: i64,
}

impl AttachmentInfo {
    /// Creates an attachment entry.
    #[must_use]
    pub fn new(
        part: impl Into<String>,
        file_name: Option<String>,
        content_type: Option<String>,
        length: i64,
    ) -> Self {
        Self {
            part: part.into(),
            file_name,
            content_type,
            length,
        }
    }

    /// MIME part reference within the owning item.
    #[must_use]
    pub fn part(&self) -> &str {
        &self.part
    }

    /// Original file name, if the server recorded one.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Content type, if the server recorded one.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Size in bytes; 0 when the server sent none.
    #[must_use]
    pub const fn length(&self) -> i64 {
        self.length
    }
}

/// A client-side contact or contact group mirroring a server item.
///
/// The attribute, attachment, and member mappings are immutable once
/// built; a change notification installs a replacement mapping rather
/// than mutating in place, so handles obtained through
/// [`Contact::attrs_shared`] keep reading the pre-update state.
#[derive(Debug, Clone)]
pub struct Contact {
    id: String,
    ref_id: Option<String>,
    folder_id: Option<String>,
    flags: Option<String>,
    tag_ids: Option<String>,
    revision: Option<String>,
    date: i64,
    metadata_changed_date: i64,
    attrs: Arc<HashMap<String, String>>,
    attachments: Arc<HashMap<String, AttachmentInfo>>,
    members: Arc<HashMap<String, Contact>>,
    member_type: MemberType,
    gal_contact: bool,
    dirty: bool,
}

impl Contact {
    /// Creates an inline group member carrying only an email address.
    #[must_use]
    pub fn inline(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ref_id: None,
            folder_id: None,
            flags: None,
            tag_ids: None,
            revision: None,
            date: 0,
            metadata_changed_date: 0,
            attrs: Arc::new(HashMap::new()),
            attachments: Arc::new(HashMap::new()),
            members: Arc::new(HashMap::new()),
            member_type: MemberType::Inline,
            gal_contact: false,
            dirty: false,
        }
    }

    /// Parses a `cn` element into a contact.
    ///
    /// `gal_sourced` marks the contact as Global-Address-List sourced;
    /// the flag comes from caller context, never from element content.
    /// Child `a` elements are partitioned by the presence of a `part`
    /// reference: with one they become attachment entries, without one
    /// plain attributes. Child `m` elements become group members, with a
    /// nested `cn` parsed recursively (GAL when the member type is `G`)
    /// and everything else stored as an inline member.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is absent, an attribute child has no
    /// name, a member lacks its value or type, or a numeric attribute is
    /// malformed.
    pub fn parse(element: &Element, gal_sourced: bool) -> Result<Self> {
        let id = element.attribute(names::A_ID)?.to_string();
        let ref_id = element.attribute_opt(names::A_REF).map(str::to_string);
        let folder_id = element.attribute_opt(names::A_FOLDER).map(str::to_string);
        let flags = element.attribute_opt(names::A_FLAGS).map(str::to_string);
        let tag_ids = element.attribute_opt(names::A_TAGS).map(str::to_string);
        let revision = element.attribute_opt(names::A_REVISION).map(str::to_string);
        let date = element.attribute_long_or(names::A_DATE, 0)?;
        // The change date travels in seconds; everything else is millis.
        let metadata_changed_date = element.attribute_long_or(names::A_CHANGE_DATE, 0)? * 1000;

        let mut attrs = HashMap::new();
        let mut attachments = HashMap::new();
        for attr_el in element.children(names::E_ATTRIBUTE) {
            let name = attr_el.attribute(names::A_ATTRIBUTE_NAME)?.to_string();
            if let Some(part) = attr_el.attribute_opt(names::A_PART) {
                let info = AttachmentInfo::new(
                    part,
                    attr_el
                        .attribute_opt(names::A_CONTENT_FILENAME)
                        .map(str::to_string),
                    attr_el
                        .attribute_opt(names::A_CONTENT_TYPE)
                        .map(str::to_string),
                    attr_el.attribute_long_or(names::A_SIZE, 0)?,
                );
                attachments.insert(name, info);
            } else {
                attrs.insert(name, attr_el.text().to_string());
            }
        }

        let mut members = HashMap::new();
        for member_el in element.children(names::E_CONTACT_GROUP_MEMBER) {
            let value = member_el.attribute(names::A_MEMBER_VALUE)?.to_string();
            let member_type = member_el.attribute(names::A_MEMBER_TYPE)?;
            let member = match member_el.child(names::E_CONTACT) {
                Some(cn) => Self::parse(cn, member_type == MemberType::Gal.code())?,
                None => Self::inline(value.as_str()),
            };
            // Last write wins on duplicate member ids.
            members.insert(value, member);
        }

        Ok(Self {
            id,
            ref_id,
            folder_id,
            flags,
            tag_ids,
            revision,
            date,
            metadata_changed_date,
            attrs: Arc::new(attrs),
            attachments: Arc::new(attachments),
            members: Arc::new(members),
            member_type: if gal_sourced {
                MemberType::Gal
            } else {
                MemberType::Contact
            },
            gal_contact: gal_sourced,
            dirty: false,
        })
    }

    /// Server-assigned item id; an email address for inline members.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Id of the canonical contact this entity overlays, if any.
    #[must_use]
    pub fn ref_id(&self) -> Option<&str> {
        self.ref_id.as_deref()
    }

    /// Containing folder id.
    #[must_use]
    pub fn folder_id(&self) -> Option<&str> {
        self.folder_id.as_deref()
    }

    /// Resolves the containing folder through the mailbox registry.
    #[must_use]
    pub fn folder<'a, T: Transport>(&self, mailbox: &'a Mailbox<T>) -> Option<&'a Folder> {
        mailbox.folder_by_id(self.folder_id.as_deref()?)
    }

    /// Flags bitstring.
    #[must_use]
    pub fn flags(&self) -> Option<&str> {
        self.flags.as_deref()
    }

    /// Comma-separated tag ids.
    #[must_use]
    pub fn tag_ids(&self) -> Option<&str> {
        self.tag_ids.as_deref()
    }

    /// Item revision.
    #[must_use]
    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }

    /// Item date, epoch milliseconds.
    #[must_use]
    pub const fn date(&self) -> i64 {
        self.date
    }

    /// Metadata change date, epoch milliseconds.
    #[must_use]
    pub const fn metadata_changed_date(&self) -> i64 {
        self.metadata_changed_date
    }

    /// Item date as a UTC timestamp, when representable.
    #[must_use]
    pub fn date_time(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.date).single()
    }

    /// Attribute mapping.
    #[must_use]
    pub fn attrs(&self) -> &HashMap<String, String> {
        &self.attrs
    }

    /// Shared handle to the attribute mapping.
    ///
    /// The handle keeps reading the same mapping even after a change
    /// notification installs a replacement on the contact.
    #[must_use]
    pub fn attrs_shared(&self) -> Arc<HashMap<String, String>> {
        Arc::clone(&self.attrs)
    }

    /// Group member mapping, keyed by member id.
    #[must_use]
    pub fn members(&self) -> &HashMap<String, Self> {
        &self.members
    }

    /// How this entity is represented as a group member.
    #[must_use]
    pub const fn member_type(&self) -> MemberType {
        self.member_type
    }

    /// True if this entity was sourced from the Global Address List.
    #[must_use]
    pub const fn is_gal_contact(&self) -> bool {
        self.gal_contact
    }

    /// True if this entity is an inline group member.
    #[must_use]
    pub const fn is_inline(&self) -> bool {
        matches!(self.member_type, MemberType::Inline)
    }

    /// True once a change notification has touched this group entity.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// True if the `type` attribute classifies this contact as a group.
    #[must_use]
    pub fn is_group(&self) -> bool {
        self.attrs.get("type").is_some_and(|value| value == "group")
    }

    /// True if any flag is set.
    #[must_use]
    pub fn has_flags(&self) -> bool {
        self.flags.as_deref().is_some_and(|flags| !flags.is_empty())
    }

    /// True if any tag is set.
    #[must_use]
    pub fn has_tags(&self) -> bool {
        self.tag_ids.as_deref().is_some_and(|tags| !tags.is_empty())
    }

    /// True if the flagged flag is set.
    #[must_use]
    pub fn is_flagged(&self) -> bool {
        self.has_flag(Flag::Flagged)
    }

    /// True if the attachment flag is set.
    #[must_use]
    pub fn has_attachment(&self) -> bool {
        self.has_flag(Flag::Attachment)
    }

    /// First non-empty of the `email`, `email2`, `email3` attributes.
    #[must_use]
    pub fn display_email(&self) -> &str {
        ["email", "email2", "email3"]
            .into_iter()
            .find_map(|key| {
                self.attrs
                    .get(key)
                    .map(String::as_str)
                    .filter(|value| !value.is_empty())
            })
            .unwrap_or("")
    }

    /// File-as mode from the `fileAs` attribute, if present and known.
    ///
    /// The explicit form travels as `8:Display Name`; only the code
    /// before the colon is interpreted.
    #[must_use]
    pub fn file_as(&self) -> Option<FileAs> {
        let value = self.attrs.get("fileAs")?;
        let code = value
            .split_once(':')
            .map_or(value.as_str(), |(code, _)| code);
        FileAs::from_code(code)
    }

    /// Names of the attachment entries.
    pub fn attachment_names(&self) -> impl Iterator<Item = &str> {
        self.attachments.keys().map(String::as_str)
    }

    /// Attachment metadata by name.
    #[must_use]
    pub fn attachment_info(&self, name: &str) -> Option<&AttachmentInfo> {
        self.attachments.get(name)
    }

    /// Part reference for an attachment.
    #[must_use]
    pub fn attachment_part(&self, name: &str) -> Option<&str> {
        self.attachments.get(name).map(AttachmentInfo::part)
    }

    /// Builds the diagnostic snapshot with its fixed key set.
    #[must_use]
    pub fn snapshot(&self) -> ContactSnapshot {
        ContactSnapshot {
            id: self.id.clone(),
            folder_id: self.folder_id.clone(),
            flags: self.flags.clone(),
            tag_ids: self.tag_ids.clone(),
            date: self.date,
            meta_data_changed_date: self.metadata_changed_date,
            revision: self.revision.clone(),
            is_flagged: self.is_flagged(),
            is_gal_contact: self.gal_contact,
            is_group: self.is_group(),
            has_flags: self.has_flags(),
            has_tags: self.has_tags(),
            attrs: self.attrs.as_ref().clone(),
        }
    }

    /// Pretty-printed JSON dump of the snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn dump(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    /// Applies a change notification in place.
    ///
    /// A notification for a different id is ignored. A matching one
    /// replaces the scalar metadata and installs the event's attribute
    /// mapping wholesale; fields the event does not carry keep their
    /// current values. A group-classified contact is then marked dirty,
    /// with the classification read from the freshly installed
    /// attributes.
    pub fn apply_modify_event(&mut self, event: &ModifyContactEvent) {
        if event.id() != self.id {
            return;
        }
        self.tag_ids = event.tag_ids_or(self.tag_ids.take());
        self.folder_id = event.folder_id_or(self.folder_id.take());
        self.flags = event.flags_or(self.flags.take());
        self.revision = event.revision_or(self.revision.take());
        self.metadata_changed_date = event.metadata_changed_date_or(self.metadata_changed_date);
        self.attrs = event.attrs_or(Arc::clone(&self.attrs));
        if self.is_group() {
            self.dirty = true;
        }
    }

    /// Permanently deletes this contact.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GalContactReadOnly`] for GAL-sourced contacts,
    /// before anything reaches the transport.
    pub fn delete<T: Transport>(&self, mailbox: &mut Mailbox<T>) -> Result<()> {
        self.ensure_mutable()?;
        mailbox.delete_contact(&self.id)
    }

    /// Moves this contact to the trash folder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GalContactReadOnly`] for GAL-sourced contacts.
    pub fn trash<T: Transport>(&self, mailbox: &mut Mailbox<T>) -> Result<()> {
        self.ensure_mutable()?;
        mailbox.trash_contact(&self.id)
    }

    /// Sets or clears the flagged state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GalContactReadOnly`] for GAL-sourced contacts.
    pub fn set_flagged<T: Transport>(&self, mailbox: &mut Mailbox<T>, flagged: bool) -> Result<()> {
        self.ensure_mutable()?;
        mailbox.flag_contact(&self.id, flagged)
    }

    /// Tags or untags this contact, resolving the tag by name or id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTag`] if nothing matches, or
    /// [`Error::GalContactReadOnly`] for GAL-sourced contacts.
    pub fn tag<T: Transport>(
        &self,
        mailbox: &mut Mailbox<T>,
        name_or_id: &str,
        tagged: bool,
    ) -> Result<()> {
        let tag = mailbox
            .tag(name_or_id)
            .ok_or_else(|| Error::UnknownTag(name_or_id.to_string()))?
            .clone();
        self.tag_with(mailbox, &tag, tagged)
    }

    /// Tags or untags this contact with a resolved tag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GalContactReadOnly`] for GAL-sourced contacts.
    pub fn tag_with<T: Transport>(
        &self,
        mailbox: &mut Mailbox<T>,
        tag: &Tag,
        tagged: bool,
    ) -> Result<()> {
        self.ensure_mutable()?;
        mailbox.tag_contact(&self.id, tag.id(), tagged)
    }

    /// Moves this contact, resolving the folder by path, name, or id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFolder`] if nothing matches, or
    /// [`Error::GalContactReadOnly`] for GAL-sourced contacts.
    pub fn move_to<T: Transport>(&self, mailbox: &mut Mailbox<T>, path_or_id: &str) -> Result<()> {
        let folder = mailbox
            .folder(path_or_id)
            .ok_or_else(|| Error::UnknownFolder(path_or_id.to_string()))?
            .clone();
        self.move_to_folder(mailbox, &folder)
    }

    /// Moves this contact into a resolved folder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GalContactReadOnly`] for GAL-sourced contacts.
    pub fn move_to_folder<T: Transport>(
        &self,
        mailbox: &mut Mailbox<T>,
        folder: &Folder,
    ) -> Result<()> {
        self.ensure_mutable()?;
        mailbox.move_contact(&self.id, folder.id())
    }

    /// Replaces or merges this contact's attributes on the server.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GalContactReadOnly`] for GAL-sourced contacts.
    pub fn modify<T: Transport>(
        &self,
        mailbox: &mut Mailbox<T>,
        attrs: &HashMap<String, String>,
        replace: bool,
    ) -> Result<()> {
        self.ensure_mutable()?;
        mailbox.modify_contact(&self.id, replace, attrs)
    }

    /// Updates folder, tags, and flags in one call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GalContactReadOnly`] for GAL-sourced contacts.
    pub fn update<T: Transport>(
        &self,
        mailbox: &mut Mailbox<T>,
        folder_id: &str,
        tag_ids: &str,
        flags: &str,
    ) -> Result<()> {
        self.ensure_mutable()?;
        mailbox.update_contact(&self.id, folder_id, tag_ids, flags)
    }

    /// Fetches an attachment body through the mailbox REST interface.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAttachment`] for a name this contact does
    /// not carry; transport failures propagate.
    pub fn attachment_data<T: Transport>(
        &self,
        mailbox: &mut Mailbox<T>,
        name: &str,
    ) -> Result<Vec<u8>> {
        let part = self
            .attachment_part(name)
            .ok_or_else(|| Error::InvalidAttachment(name.to_string()))?;
        let path = format!("?id={}&part={part}", self.id);
        mailbox.rest_resource(&path)
    }

    fn ensure_mutable(&self) -> Result<()> {
        if self.gal_contact {
            return Err(Error::GalContactReadOnly);
        }
        Ok(())
    }

    fn has_flag(&self, flag: Flag) -> bool {
        self.flags
            .as_deref()
            .is_some_and(|flags| flags.contains(flag.code()))
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Contact {}]", self.id)
    }
}

/// Serializable diagnostic snapshot of a contact.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSnapshot {
    /// Item id.
    pub id: String,
    /// Containing folder id.
    pub folder_id: Option<String>,
    /// Flags bitstring.
    pub flags: Option<String>,
    /// Comma-separated tag ids.
    pub tag_ids: Option<String>,
    /// Item date, epoch milliseconds.
    pub date: i64,
    /// Metadata change date, epoch milliseconds.
    pub meta_data_changed_date: i64,
    /// Item revision.
    pub revision: Option<String>,
    /// Whether the flagged flag is set.
    pub is_flagged: bool,
    /// Whether the contact is GAL-sourced.
    pub is_gal_contact: bool,
    /// Whether the contact is classified as a group.
    pub is_group: bool,
    /// Whether any flag is set.
    pub has_flags: bool,
    /// Whether any tag is set.
    pub has_tags: bool,
    /// Attribute mapping.
    pub attrs: HashMap<String, String>,
}
