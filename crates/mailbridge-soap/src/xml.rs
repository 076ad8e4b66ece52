//! XML codec for wire elements.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::element::Element;
use crate::error::{Error, Result};

/// Parses an XML document into an element tree.
pub fn parse(input: &str) -> Result<Element> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    loop {
        match reader.read_event().map_err(|e| Error::Xml(e.to_string()))? {
            Event::Start(start) => stack.push(element_from_start(&start)?),
            Event::Empty(start) => {
                let element = element_from_start(&start)?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => return Ok(element),
                }
            }
            Event::Text(text) => {
                let value = text.unescape().map_err(|e| Error::Xml(e.to_string()))?;
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&value);
                }
            }
            Event::CData(data) => {
                let raw = data.into_inner();
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&raw));
                }
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| Error::Xml("unmatched closing tag".to_string()))?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => return Ok(element),
                }
            }
            Event::Eof => return Err(Error::Xml("unexpected end of document".to_string())),
            _ => {}
        }
    }
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Element::new(name);
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| Error::Xml(e.to_string()))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|e| Error::Xml(e.to_string()))?
            .into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

/// Serializes an element tree as an XML fragment.
pub fn write(element: &Element) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    write_element(&mut writer, element)?;
    String::from_utf8(writer.into_inner()).map_err(|e| Error::Xml(e.to_string()))
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.children.is_empty() && element.text.is_empty() {
        writer
            .write_event(Event::Empty(start))
            .map_err(|e| Error::Xml(e.to_string()))?;
        return Ok(());
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| Error::Xml(e.to_string()))?;
    if !element.text.is_empty() {
        writer
            .write_event(Event::Text(BytesText::new(element.text.as_str())))
            .map_err(|e| Error::Xml(e.to_string()))?;
    }
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(|e| Error::Xml(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_nested_document() {
        let element = parse(
            r#"<cn id="101" l="7">
                 <a n="email">a@x.com</a>
                 <m value="102" type="C"><cn id="102"/></m>
               </cn>"#,
        )
        .unwrap();

        assert_eq!(element.name(), "cn");
        assert_eq!(element.attribute_opt("id"), Some("101"));
        assert_eq!(element.attribute_opt("l"), Some("7"));
        assert_eq!(element.children("a").count(), 1);
        let member = element.child("m").unwrap();
        assert_eq!(member.child("cn").unwrap().attribute_opt("id"), Some("102"));
    }

    #[test]
    fn parse_text_content() {
        let element = parse("<a n=\"email\">a@x.com</a>").unwrap();
        assert_eq!(element.text(), "a@x.com");
    }

    #[test]
    fn parse_unescapes_entities() {
        let element = parse("<a n=\"note\">fish &amp; chips</a>").unwrap();
        assert_eq!(element.text(), "fish & chips");
        let element = parse("<a v=\"&lt;b&gt;\"/>").unwrap();
        assert_eq!(element.attribute_opt("v"), Some("<b>"));
    }

    #[test]
    fn parse_empty_root() {
        let element = parse("<device id=\"dev-1\"/>").unwrap();
        assert_eq!(element.name(), "device");
        assert_eq!(element.attribute_opt("id"), Some("dev-1"));
    }

    #[test]
    fn parse_rejects_truncated_input() {
        assert!(matches!(parse("<cn id=\"1\">"), Err(Error::Xml(_))));
    }

    #[test]
    fn write_empty_element_self_closes() {
        let xml = write(&Element::new("device").with_attribute("id", "dev-1")).unwrap();
        assert_eq!(xml, "<device id=\"dev-1\"/>");
    }

    #[test]
    fn write_escapes_and_reparses() {
        let original = Element::new("a")
            .with_attribute("n", "note")
            .with_text("a < b & \"c\"");
        let xml = write(&original).unwrap();
        assert_eq!(parse(&xml).unwrap(), original);
    }
}
