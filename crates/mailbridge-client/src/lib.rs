//! # mailbridge-client
//!
//! Client-side domain layer for the mailbridge groupware client.
//!
//! ## Features
//!
//! - **Contact entities**: wire parsing of contacts and contact groups,
//!   including GAL-sourced and inline group members
//! - **Change notifications**: in-place application of server deltas with
//!   whole-mapping replacement, never in-place map mutation
//! - **Read-only guard**: every mutating operation on a GAL-sourced
//!   contact fails before anything reaches the server
//! - **Mailbox delegation**: contact mutations build the corresponding
//!   wire requests and hand them to a caller-supplied transport
//!
//! ## Quick Start
//!
//! ```ignore
//! use mailbridge_client::{Contact, Mailbox};
//! use mailbridge_soap::Element;
//!
//! let element = Element::from_xml(r#"<cn id="101"><a n="email">a@x.com</a></cn>"#)?;
//! let contact = Contact::parse(&element, false)?;
//! assert_eq!(contact.display_email(), "a@x.com");
//!
//! let mut mailbox = Mailbox::new(transport);
//! contact.set_flagged(&mut mailbox, true)?;
//! ```
//!
//! ## Modules
//!
//! - [`contact`]: the contact entity and its wire parsing
//! - [`event`]: change-notification deltas

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod contact;
mod error;
pub mod event;
mod folder;
mod mailbox;
mod tag;

pub use contact::{AttachmentInfo, Contact, ContactSnapshot, FileAs, Flag, MemberType};
pub use error::{Error, Result};
pub use event::ModifyContactEvent;
pub use folder::Folder;
pub use mailbox::{Mailbox, MailboxBuilder, Transport};
pub use tag::Tag;
