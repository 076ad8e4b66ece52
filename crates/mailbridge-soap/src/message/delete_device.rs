//! Device unmapping request.

use crate::element::Element;
use crate::error::Result;
use crate::names;

use super::{Request, expect_name};

/// Permanently deletes the mapping for one registered device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteDeviceRequest {
    device_id: String,
}

impl DeleteDeviceRequest {
    /// Creates a request for the given device id.
    #[must_use]
    pub fn new(device_id: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
        }
    }

    /// Id of the device whose mapping is removed.
    #[must_use]
    pub fn device_id(&self) -> &str {
        &self.device_id
    }
}

impl Request for DeleteDeviceRequest {
    const NAME: &'static str = names::E_DELETE_DEVICE_REQUEST;

    fn serialize(&self) -> Element {
        Element::new(Self::NAME).with_child(
            Element::new(names::E_DEVICE).with_attribute(names::A_ID, self.device_id.as_str()),
        )
    }

    fn deserialize(element: &Element) -> Result<Self> {
        expect_name(element, Self::NAME)?;
        let device = element.required_child(names::E_DEVICE)?;
        Ok(Self {
            device_id: device.attribute(names::A_ID)?.to_string(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn serialize_shape() {
        let element = DeleteDeviceRequest::new("dev-1").serialize();
        assert_eq!(element.name(), "DeleteDeviceRequest");
        let device = element.child("device").unwrap();
        assert_eq!(device.attribute("id").unwrap(), "dev-1");
    }

    #[test]
    fn deserialize() {
        let element = Element::new("DeleteDeviceRequest")
            .with_child(Element::new("device").with_attribute("id", "dev-9"));
        let request = DeleteDeviceRequest::deserialize(&element).unwrap();
        assert_eq!(request.device_id(), "dev-9");
    }

    #[test]
    fn deserialize_requires_device() {
        let element = Element::new("DeleteDeviceRequest");
        assert!(matches!(
            DeleteDeviceRequest::deserialize(&element),
            Err(Error::MissingElement { .. })
        ));
    }

    #[test]
    fn deserialize_rejects_wrong_root() {
        let element = Element::new("GetDeviceRequest");
        assert!(matches!(
            DeleteDeviceRequest::deserialize(&element),
            Err(Error::UnexpectedElement { .. })
        ));
    }
}
