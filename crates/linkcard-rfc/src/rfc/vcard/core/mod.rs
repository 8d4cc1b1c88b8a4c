//! Core vCard types.

mod property;
mod vcard;

pub use property::{VCardParameter, VCardProperty};
pub use vcard::{VCard, VCardVersion};
