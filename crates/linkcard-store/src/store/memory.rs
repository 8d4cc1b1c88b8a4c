use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::RwLock;

use super::ContactStore;
use crate::error::{StoreError, StoreResult};
use crate::model::contact::{ContactRecord, NewContact};
use crate::model::id::ContactId;

/// Process-memory contact store.
///
/// Entries are never evicted; memory grows with every created link until the
/// process exits.
#[derive(Debug, Default)]
pub struct MemoryContactStore {
    contacts: RwLock<HashMap<ContactId, ContactRecord>>,
}

impl MemoryContactStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Returns the number of stored contacts.
    ///
    /// ## Errors
    /// Returns an error if the lock is poisoned.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self
            .contacts
            .read()
            .map_err(|_poisoned| StoreError::Poisoned)?
            .len())
    }

    /// ## Summary
    /// Returns true if no contact has been stored yet.
    ///
    /// ## Errors
    /// Returns an error if the lock is poisoned.
    pub fn is_empty(&self) -> StoreResult<bool> {
        self.len().map(|len| len == 0)
    }
}

impl ContactStore for MemoryContactStore {
    #[tracing::instrument(skip(self, contact))]
    fn insert(&self, contact: NewContact) -> StoreResult<ContactRecord> {
        let mut contacts = self
            .contacts
            .write()
            .map_err(|_poisoned| StoreError::Poisoned)?;

        loop {
            match contacts.entry(ContactId::generate()) {
                Entry::Occupied(occupied) => {
                    tracing::warn!(id = %occupied.key(), "Contact id collision, generating another");
                }
                Entry::Vacant(vacant) => {
                    let record = contact.into_record(vacant.key().clone());
                    vacant.insert(record.clone());
                    tracing::trace!(id = %record.id, "Contact stored");
                    return Ok(record);
                }
            }
        }
    }

    fn get(&self, id: &str) -> StoreResult<Option<ContactRecord>> {
        let contacts = self
            .contacts
            .read()
            .map_err(|_poisoned| StoreError::Poisoned)?;

        Ok(contacts.get(id).cloned())
    }
}
