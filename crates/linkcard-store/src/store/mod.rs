mod memory;

pub use memory::MemoryContactStore;

use crate::error::StoreResult;
use crate::model::contact::{ContactRecord, NewContact};

/// Storage for contacts behind vCard download links.
///
/// Records move from absent to created and never change afterwards: there is
/// no update, deletion or expiry.
pub trait ContactStore: Send + Sync {
    /// ## Summary
    /// Assigns a fresh identifier to the contact and stores it.
    ///
    /// The identifier is unique for the lifetime of the store.
    ///
    /// ## Errors
    /// Returns an error if the underlying storage is unusable.
    fn insert(&self, contact: NewContact) -> StoreResult<ContactRecord>;

    /// ## Summary
    /// Looks up a contact by identifier.
    ///
    /// Returns `Ok(None)` for ids that were never issued, including malformed ones.
    ///
    /// ## Errors
    /// Returns an error if the underlying storage is unusable.
    fn get(&self, id: &str) -> StoreResult<Option<ContactRecord>>;
}
