//! Download file names for generated vCards.
//!
//! ## Summary
//! Derives a filesystem-safe `.vcf` file name from a contact's display name.
//! Only ASCII letters, digits, `_` and `-` survive; everything else, including
//! whitespace, is dropped.

/// Stem used when nothing of the contact name survives sanitizing.
pub const FALLBACK_FILE_STEM: &str = "contact";

pub const VCARD_FILE_EXTENSION: &str = "vcf";

/// Build the download file name for a contact.
///
/// Examples:
/// - "Jane Doe" -> "JaneDoe.vcf"
/// - "Jane Doe!!" -> "JaneDoe.vcf"
/// - "" -> "contact.vcf"
#[must_use]
pub fn file_name_for(name: &str) -> String {
    let stem: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();

    if stem.is_empty() {
        format!("{FALLBACK_FILE_STEM}.{VCARD_FILE_EXTENSION}")
    } else {
        format!("{stem}.{VCARD_FILE_EXTENSION}")
    }
}
