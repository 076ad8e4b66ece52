//! Request messages with explicit wire codecs.

mod delete_device;
mod save_draft;

pub use delete_device::DeleteDeviceRequest;
pub use save_draft::{DraftMessage, SaveDraftRequest};

use crate::element::Element;
use crate::error::{Error, Result};

/// A request message bound to the wire through an explicit codec.
pub trait Request: Sized {
    /// Root element name for this request on the wire.
    const NAME: &'static str;

    /// Builds the wire element for this request.
    fn serialize(&self) -> Element;

    /// Reads a request back from its wire element.
    ///
    /// # Errors
    ///
    /// Returns an error if the element's name is not [`Self::NAME`] or a
    /// required part of the message is absent.
    fn deserialize(element: &Element) -> Result<Self>;
}

pub(crate) fn expect_name(element: &Element, expected: &'static str) -> Result<()> {
    if element.name() == expected {
        Ok(())
    } else {
        Err(Error::UnexpectedElement {
            expected: expected.to_string(),
            found: element.name().to_string(),
        })
    }
}
