//! Integration tests for contact-group parsing and mailbox delegation.
//!
//! These tests drive raw XML through the wire codec into the client
//! entities and use a recording transport instead of a real server.

#![allow(clippy::unwrap_used)]

use mailbridge_client::{Contact, Mailbox, ModifyContactEvent, Result, Tag, Transport};
use mailbridge_soap::Element;

/// Transport double that records everything handed to it.
#[derive(Debug, Default)]
struct RecordingTransport {
    sent: Vec<Element>,
    fetched: Vec<String>,
}

impl Transport for RecordingTransport {
    fn send(&mut self, request: Element) -> Result<Element> {
        self.sent.push(request);
        Ok(Element::new("ok"))
    }

    fn fetch(&mut self, path: &str) -> Result<Vec<u8>> {
        self.fetched.push(path.to_string());
        Ok(Vec::new())
    }
}

const GROUP_XML: &str = r#"<cn id="101" l="7" f="f" rev="55" d="1700000000000" md="1699">
  <a n="email">a@x.com</a>
  <a n="type">group</a>
  <m value="102" type="C">
    <cn id="102"><a n="email">b@x.com</a></cn>
  </m>
  <m value="inline1@x.com" type="I"/>
</cn>"#;

#[test]
fn parse_group_from_xml() {
    let element = Element::from_xml(GROUP_XML).unwrap();
    let contact = Contact::parse(&element, false).unwrap();

    assert_eq!(contact.id(), "101");
    assert!(contact.is_group());
    assert!(!contact.is_gal_contact());
    assert_eq!(contact.metadata_changed_date(), 1_699_000);
    assert_eq!(contact.members().len(), 2);

    let full = &contact.members()["102"];
    assert_eq!(full.display_email(), "b@x.com");
    assert!(!full.is_gal_contact());

    let inline = &contact.members()["inline1@x.com"];
    assert!(inline.is_inline());
    assert!(inline.attrs().is_empty());
    assert!(inline.members().is_empty());
}

#[test]
fn gal_member_round_trips_through_xml() {
    let xml = r#"<cn id="300">
      <m value="301" type="G"><cn id="301" ref="uid=301,ou=people"/></m>
    </cn>"#;
    let contact = Contact::parse(&Element::from_xml(xml).unwrap(), false).unwrap();
    let member = &contact.members()["301"];
    assert!(member.is_gal_contact());
    assert_eq!(member.ref_id(), Some("uid=301,ou=people"));
}

#[test]
fn notification_flows_through_the_mailbox_cache() {
    let mut mailbox = Mailbox::builder(RecordingTransport::default())
        .tag(Tag::new("21", "family"))
        .build();
    let element = Element::from_xml(GROUP_XML).unwrap();
    mailbox.cache_contact(Contact::parse(&element, false).unwrap());

    let event_xml = r#"<cn id="101" l="3" f="" md="1800"><a n="type">group</a></cn>"#;
    let event = ModifyContactEvent::parse(&Element::from_xml(event_xml).unwrap()).unwrap();
    mailbox.handle_modify_event(&event);

    let contact = mailbox.contact("101").unwrap();
    assert_eq!(contact.folder_id(), Some("3"));
    assert_eq!(contact.flags(), Some(""));
    assert_eq!(contact.metadata_changed_date(), 1_800_000);
    assert!(contact.is_dirty());
    // Fields the event did not carry are retained.
    assert_eq!(contact.revision(), Some("55"));
}

#[test]
fn gal_contact_mutations_never_reach_the_transport() {
    let mut mailbox = Mailbox::new(RecordingTransport::default());
    let xml = r#"<cn id="400"><a n="email">gal@x.com</a></cn>"#;
    let contact = Contact::parse(&Element::from_xml(xml).unwrap(), true).unwrap();

    assert!(contact.delete(&mut mailbox).is_err());
    assert!(contact.set_flagged(&mut mailbox, true).is_err());
    assert!(mailbox.transport().sent.is_empty());
}

#[test]
fn mutation_requests_serialize_to_xml() {
    let mut mailbox = Mailbox::new(RecordingTransport::default());
    let xml = r#"<cn id="101"/>"#;
    let contact = Contact::parse(&Element::from_xml(xml).unwrap(), false).unwrap();

    contact.set_flagged(&mut mailbox, true).unwrap();
    let request = &mailbox.transport().sent[0];
    assert_eq!(
        request.to_xml().unwrap(),
        "<ContactActionRequest><action id=\"101\" op=\"flag\"/></ContactActionRequest>"
    );
}
