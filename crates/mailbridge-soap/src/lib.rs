//! # mailbridge-soap
//!
//! Wire-format layer for the mailbridge groupware client.
//!
//! ## Features
//!
//! - **Element tree**: an ordered XML element model (`Element`) with the
//!   typed accessors the client layer consumes (required and optional
//!   attributes, numeric attributes, child listing, text content)
//! - **XML codec**: parse and serialize element trees via `quick-xml`
//! - **Wire names**: the server's short element/attribute names, kept
//!   verbatim as the protocol contract
//! - **Request messages**: data holders bound to the wire through
//!   explicit `serialize`/`deserialize` codecs rather than reflective
//!   field bindings
//!
//! ## Quick Start
//!
//! ```ignore
//! use mailbridge_soap::{DeleteDeviceRequest, Element, Request};
//!
//! let request = DeleteDeviceRequest::new("device-1");
//! let xml = request.serialize().to_xml()?;
//!
//! let element = Element::from_xml(&xml)?;
//! let parsed = DeleteDeviceRequest::deserialize(&element)?;
//! assert_eq!(parsed.device_id(), "device-1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod element;
mod error;
pub mod message;
pub mod names;
mod xml;

pub use element::Element;
pub use error::{Error, Result};
pub use message::{DeleteDeviceRequest, DraftMessage, Request, SaveDraftRequest};
