//! Ordered wire element tree.

use crate::error::{Error, Result};
use crate::xml;

/// A single wire element: a name, ordered attributes, ordered children,
/// and text content.
///
/// Duplicate child names are allowed (repeated `<a>` or `<m>` elements);
/// attribute lookup returns the first occurrence of a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) attributes: Vec<(String, String)>,
    pub(crate) children: Vec<Element>,
    pub(crate) text: String,
}

impl Element {
    /// Creates an empty element with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: String::new(),
        }
    }

    /// Adds an attribute, replacing an existing one with the same name.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Sets the text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Adds an attribute in place, replacing an existing one with the
    /// same name.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Appends a child element in place.
    pub fn add_child(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text content.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Attributes in document order.
    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Returns a required attribute value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingAttribute`] if the attribute is absent.
    pub fn attribute(&self, name: &str) -> Result<&str> {
        self.attribute_opt(name).ok_or_else(|| Error::MissingAttribute {
            element: self.name.clone(),
            name: name.to_string(),
        })
    }

    /// Returns an attribute value, or `None` if absent.
    #[must_use]
    pub fn attribute_opt(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns a required attribute parsed as an integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingAttribute`] if the attribute is absent, or
    /// [`Error::InvalidAttribute`] if the value is not numeric.
    pub fn attribute_long(&self, name: &str) -> Result<i64> {
        let value = self.attribute(name)?;
        self.parse_long(name, value)
    }

    /// Returns an attribute parsed as an integer, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAttribute`] if the value is present but
    /// not numeric.
    pub fn attribute_long_opt(&self, name: &str) -> Result<Option<i64>> {
        match self.attribute_opt(name) {
            None => Ok(None),
            Some(value) => self.parse_long(name, value).map(Some),
        }
    }

    /// Returns an attribute parsed as an integer, or `default` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAttribute`] if the value is present but
    /// not numeric.
    pub fn attribute_long_or(&self, name: &str, default: i64) -> Result<i64> {
        Ok(self.attribute_long_opt(name)?.unwrap_or(default))
    }

    /// Iterates over child elements with the given name, in order.
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Self> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Returns the first child element with the given name, if any.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Returns a required child element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingElement`] if no such child exists.
    pub fn required_child(&self, name: &str) -> Result<&Self> {
        self.child(name).ok_or_else(|| Error::MissingElement {
            parent: self.name.clone(),
            name: name.to_string(),
        })
    }

    /// Parses an XML document into an element tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Xml`] for syntactically invalid input.
    pub fn from_xml(input: &str) -> Result<Self> {
        xml::parse(input)
    }

    /// Serializes this element tree as an XML fragment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Xml`] if writing fails.
    pub fn to_xml(&self) -> Result<String> {
        xml::write(self)
    }

    fn parse_long(&self, name: &str, value: &str) -> Result<i64> {
        value.parse().map_err(|_| Error::InvalidAttribute {
            element: self.name.clone(),
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new("cn")
            .with_attribute("id", "101")
            .with_attribute("d", "1700000000000")
            .with_child(Element::new("a").with_attribute("n", "email").with_text("a@x.com"))
            .with_child(Element::new("a").with_attribute("n", "type").with_text("group"))
            .with_child(Element::new("m").with_attribute("value", "102"))
    }

    #[test]
    fn required_attribute() {
        let element = sample();
        assert_eq!(element.attribute("id").unwrap(), "101");
        assert!(matches!(
            element.attribute("rev"),
            Err(Error::MissingAttribute { .. })
        ));
    }

    #[test]
    fn optional_attribute() {
        let element = sample();
        assert_eq!(element.attribute_opt("id"), Some("101"));
        assert_eq!(element.attribute_opt("rev"), None);
    }

    #[test]
    fn numeric_attribute() {
        let element = sample();
        assert_eq!(element.attribute_long("d").unwrap(), 1_700_000_000_000);
        assert_eq!(element.attribute_long_or("md", 7).unwrap(), 7);
    }

    #[test]
    fn non_numeric_attribute_is_an_error() {
        let element = Element::new("cn").with_attribute("d", "soon");
        assert!(matches!(
            element.attribute_long("d"),
            Err(Error::InvalidAttribute { .. })
        ));
        assert!(matches!(
            element.attribute_long_or("d", 0),
            Err(Error::InvalidAttribute { .. })
        ));
    }

    #[test]
    fn set_attribute_replaces() {
        let mut element = Element::new("cn").with_attribute("id", "1");
        element.set_attribute("id", "2");
        assert_eq!(element.attribute_opt("id"), Some("2"));
        assert_eq!(element.attributes().len(), 1);
    }

    #[test]
    fn children_filter_by_name_in_order() {
        let element = sample();
        let names: Vec<_> = element
            .children("a")
            .map(|a| a.attribute("n").unwrap())
            .collect();
        assert_eq!(names, vec!["email", "type"]);
        assert_eq!(element.children("m").count(), 1);
        assert_eq!(element.children("cn").count(), 0);
    }

    #[test]
    fn optional_and_required_child() {
        let element = sample();
        assert!(element.child("m").is_some());
        assert!(element.child("device").is_none());
        assert!(matches!(
            element.required_child("device"),
            Err(Error::MissingElement { .. })
        ));
    }
}
