//! The owning mailbox: contact cache, folder and tag registries, and
//! delegation of contact mutations to the server transport.

use std::collections::HashMap;

use mailbridge_soap::{Element, names};
use tracing::{debug, warn};

use crate::contact::Contact;
use crate::error::Result;
use crate::event::ModifyContactEvent;
use crate::folder::Folder;
use crate::tag::Tag;

/// Carrier for request elements and REST fetches.
///
/// The SOAP/HTTP stack lives behind this trait; the mailbox builds wire
/// elements and hands them over.
pub trait Transport {
    /// Sends a request element and returns the response element.
    ///
    /// # Errors
    ///
    /// Implementations surface their own failure conditions.
    fn send(&mut self, request: Element) -> Result<Element>;

    /// Fetches a REST resource relative to the mailbox root.
    ///
    /// # Errors
    ///
    /// Implementations surface their own failure conditions.
    fn fetch(&mut self, path: &str) -> Result<Vec<u8>>;
}

/// Client-side mailbox state for one account.
#[derive(Debug)]
pub struct Mailbox<T> {
    transport: T,
    folders: Vec<Folder>,
    tags: Vec<Tag>,
    contacts: HashMap<String, Contact>,
}

impl<T: Transport> Mailbox<T> {
    /// Creates a mailbox over the given transport with empty registries.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            folders: Vec::new(),
            tags: Vec::new(),
            contacts: HashMap::new(),
        }
    }

    /// Creates a builder for seeding folders and tags.
    pub fn builder(transport: T) -> MailboxBuilder<T> {
        MailboxBuilder {
            transport,
            folders: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Borrows the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutably borrows the transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Registers a folder.
    pub fn add_folder(&mut self, folder: Folder) {
        self.folders.push(folder);
    }

    /// Registers a tag.
    pub fn add_tag(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    /// Looks up a folder by id.
    #[must_use]
    pub fn folder_by_id(&self, id: &str) -> Option<&Folder> {
        self.folders.iter().find(|folder| folder.id() == id)
    }

    /// Looks up a folder by path, name, or id.
    #[must_use]
    pub fn folder(&self, path_or_id: &str) -> Option<&Folder> {
        self.folders.iter().find(|folder| {
            folder.path() == path_or_id || folder.name() == path_or_id || folder.id() == path_or_id
        })
    }

    /// Looks up a tag by id.
    #[must_use]
    pub fn tag_by_id(&self, id: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.id() == id)
    }

    /// Looks up a tag by name or id.
    #[must_use]
    pub fn tag(&self, name_or_id: &str) -> Option<&Tag> {
        self.tags
            .iter()
            .find(|tag| tag.name() == name_or_id || tag.id() == name_or_id)
    }

    /// Inserts or replaces a cached contact.
    pub fn cache_contact(&mut self, contact: Contact) {
        self.contacts.insert(contact.id().to_string(), contact);
    }

    /// Cached contact by id.
    #[must_use]
    pub fn contact(&self, id: &str) -> Option<&Contact> {
        self.contacts.get(id)
    }

    /// Removes a contact from the cache.
    pub fn take_contact(&mut self, id: &str) -> Option<Contact> {
        self.contacts.remove(id)
    }

    /// Routes a change notification to the cached contact it targets.
    pub fn handle_modify_event(&mut self, event: &ModifyContactEvent) {
        if let Some(contact) = self.contacts.get_mut(event.id()) {
            contact.apply_modify_event(event);
            debug!("applied modify event to contact {}", event.id());
        } else {
            warn!("modify event for uncached contact {}", event.id());
        }
    }

    /// Permanently deletes a contact.
    ///
    /// # Errors
    ///
    /// Transport failures propagate.
    pub fn delete_contact(&mut self, id: &str) -> Result<()> {
        self.contact_action(id, "delete", |action| action)
    }

    /// Moves a contact to the trash folder.
    ///
    /// # Errors
    ///
    /// Transport failures propagate.
    pub fn trash_contact(&mut self, id: &str) -> Result<()> {
        self.contact_action(id, "trash", |action| action)
    }

    /// Sets or clears a contact's flagged state.
    ///
    /// # Errors
    ///
    /// Transport failures propagate.
    pub fn flag_contact(&mut self, id: &str, flagged: bool) -> Result<()> {
        self.contact_action(id, if flagged { "flag" } else { "!flag" }, |action| action)
    }

    /// Tags or untags a contact.
    ///
    /// # Errors
    ///
    /// Transport failures propagate.
    pub fn tag_contact(&mut self, id: &str, tag_id: &str, tagged: bool) -> Result<()> {
        self.contact_action(id, if tagged { "tag" } else { "!tag" }, |action| {
            action.with_attribute(names::A_TAG, tag_id)
        })
    }

    /// Moves a contact to a folder.
    ///
    /// # Errors
    ///
    /// Transport failures propagate.
    pub fn move_contact(&mut self, id: &str, folder_id: &str) -> Result<()> {
        self.contact_action(id, "move", |action| {
            action.with_attribute(names::A_FOLDER, folder_id)
        })
    }

    /// Updates a contact's folder, tags, and flags in one call.
    ///
    /// # Errors
    ///
    /// Transport failures propagate.
    pub fn update_contact(
        &mut self,
        id: &str,
        folder_id: &str,
        tag_ids: &str,
        flags: &str,
    ) -> Result<()> {
        self.contact_action(id, "update", |action| {
            action
                .with_attribute(names::A_FOLDER, folder_id)
                .with_attribute(names::A_TAGS, tag_ids)
                .with_attribute(names::A_FLAGS, flags)
        })
    }

    /// Replaces or merges a contact's attributes.
    ///
    /// # Errors
    ///
    /// Transport failures propagate.
    pub fn modify_contact(
        &mut self,
        id: &str,
        replace: bool,
        attrs: &HashMap<String, String>,
    ) -> Result<()> {
        let mut cn = Element::new(names::E_CONTACT).with_attribute(names::A_ID, id);
        for (name, value) in attrs {
            cn.add_child(
                Element::new(names::E_ATTRIBUTE)
                    .with_attribute(names::A_ATTRIBUTE_NAME, name.as_str())
                    .with_text(value.as_str()),
            );
        }
        let request = Element::new(names::E_MODIFY_CONTACT_REQUEST)
            .with_attribute(names::A_REPLACE, if replace { "1" } else { "0" })
            .with_child(cn);
        debug!("modify contact {id} (replace={replace})");
        self.transport.send(request)?;
        Ok(())
    }

    /// Fetches a REST resource relative to the mailbox root.
    ///
    /// # Errors
    ///
    /// Transport failures propagate.
    pub fn rest_resource(&mut self, path: &str) -> Result<Vec<u8>> {
        self.transport.fetch(path)
    }

    fn contact_action(
        &mut self,
        id: &str,
        op: &str,
        build: impl FnOnce(Element) -> Element,
    ) -> Result<()> {
        let action = build(
            Element::new(names::E_ACTION)
                .with_attribute(names::A_ID, id)
                .with_attribute(names::A_OPERATION, op),
        );
        let request = Element::new(names::E_CONTACT_ACTION_REQUEST).with_child(action);
        debug!("contact action '{op}' on {id}");
        self.transport.send(request)?;
        Ok(())
    }
}

/// Builder seeding a mailbox with folders and tags.
#[derive(Debug)]
pub struct MailboxBuilder<T> {
    transport: T,
    folders: Vec<Folder>,
    tags: Vec<Tag>,
}

impl<T: Transport> MailboxBuilder<T> {
    /// Adds a folder to the registry.
    #[must_use]
    pub fn folder(mut self, folder: Folder) -> Self {
        self.folders.push(folder);
        self
    }

    /// Adds a tag to the registry.
    #[must_use]
    pub fn tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Builds the mailbox.
    #[must_use]
    pub fn build(self) -> Mailbox<T> {
        Mailbox {
            transport: self.transport,
            folders: self.folders,
            tags: self.tags,
            contacts: HashMap::new(),
        }
    }
}
