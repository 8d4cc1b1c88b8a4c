//! vCard serialization.

use crate::rfc::vcard::core::{VCard, VCardProperty};

const CRLF: &str = "\r\n";

/// Serializes a single vCard to a string.
#[must_use]
pub fn serialize_single(card: &VCard) -> String {
    let mut output = String::new();
    serialize_vcard(card, &mut output);
    output
}

/// Renders the downloadable card for a stored contact.
///
/// ## Summary
/// Produces exactly `BEGIN`, `VERSION:3.0`, `FN`, `TEL;TYPE=CELL`, `END`, each
/// terminated by CRLF. Values are not escaped.
#[must_use]
pub fn render_contact(name: &str, phone: &str) -> String {
    serialize_single(&VCard::contact(name, phone))
}

fn serialize_vcard(card: &VCard, output: &mut String) {
    output.push_str("BEGIN:VCARD");
    output.push_str(CRLF);

    // VERSION must be first after BEGIN
    output.push_str("VERSION:");
    output.push_str(card.version.as_str());
    output.push_str(CRLF);

    for prop in &card.properties {
        serialize_property(prop, output);
    }

    output.push_str("END:VCARD");
    output.push_str(CRLF);
}

fn serialize_property(prop: &VCardProperty, output: &mut String) {
    output.push_str(&prop.name);

    for param in &prop.params {
        output.push(';');
        output.push_str(&param.name);
        output.push('=');
        output.push_str(&param.value);
    }

    output.push(':');
    output.push_str(&prop.value);
    output.push_str(CRLF);
}
