//! Opaque contact identifiers.

use rand::RngCore;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

/// Number of random bytes behind every identifier (128 bits).
pub const CONTACT_ID_BYTES: usize = 16;

/// An opaque, URL-safe contact identifier.
///
/// Generated from the operating system's RNG and hex-encoded, so it carries no
/// structure a client could decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0u8; CONTACT_ID_BYTES];
        OsRng.fill_bytes(&mut bytes);
        Self(hex::encode(bytes))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for ContactId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<ContactId> for String {
    fn from(id: ContactId) -> Self {
        id.0
    }
}
