pub mod uri;
pub mod vcard;
