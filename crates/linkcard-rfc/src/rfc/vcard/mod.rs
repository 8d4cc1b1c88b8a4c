//! vCard 3.0 output (RFC 2426).
//!
//! This module builds the minimal contact cards served as `.vcf` downloads.
//! Only serialization is supported; nothing here parses vCard input.
//!
//! ## Usage
//!
//! ```rust
//! use linkcard_rfc::rfc::vcard::{VCard, serialize_single};
//!
//! let card = VCard::contact("Jane Doe", "+15551234567");
//! assert_eq!(
//!     serialize_single(&card),
//!     "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Jane Doe\r\nTEL;TYPE=CELL:+15551234567\r\nEND:VCARD\r\n"
//! );
//! ```
//!
//! ## Known limitation
//!
//! Property values are written verbatim. Commas, semicolons, backslashes and
//! newlines in a value are not escaped and long lines are not folded.
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`VCard`, `VCardProperty`, `VCardVersion`)
//! - [`build`] - Serialization functions

pub mod build;
pub mod core;

pub use self::build::{render_contact, serialize_single};
pub use self::core::{VCard, VCardParameter, VCardProperty, VCardVersion};
