use chrono::{DateTime, Utc};
use serde::Serialize;

use super::id::ContactId;

/// A stored contact behind a vCard download link.
///
/// Records are immutable once created and live for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    pub id: ContactId,
    pub name: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

/// A contact that has passed validation but has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
}

impl NewContact {
    #[must_use]
    pub fn into_record(self, id: ContactId) -> ContactRecord {
        ContactRecord {
            id,
            name: self.name,
            phone: self.phone,
            created_at: Utc::now(),
        }
    }
}
