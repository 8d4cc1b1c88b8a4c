//! The `VCard` container.

use super::property::{VCardParameter, VCardProperty};

/// vCard format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VCardVersion {
    /// vCard 3.0 (RFC 2426), understood by every phone address book.
    #[default]
    V3,
}

impl VCardVersion {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V3 => "3.0",
        }
    }
}

/// A vCard: a version plus properties in output order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VCard {
    pub version: VCardVersion,
    pub properties: Vec<VCardProperty>,
}

impl VCard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the card served for a stored contact: a formatted name and one cell number.
    #[must_use]
    pub fn contact(name: &str, phone: &str) -> Self {
        let mut card = Self::new();
        card.add_property(VCardProperty::text("FN", name));
        card.add_property(
            VCardProperty::text("TEL", phone).with_param(VCardParameter::type_param("CELL")),
        );
        card
    }

    pub fn add_property(&mut self, property: VCardProperty) {
        self.properties.push(property);
    }
}
