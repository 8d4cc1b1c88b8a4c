//! Contact link creation and vCard download service.

use linkcard_core::constants::{
    DEFAULT_CONTACT_NAME, PHONE_REQUIRED_MESSAGE, VCARD_CONTENT_TYPE, VCARD_ROUTE_PREFIX,
};
use linkcard_core::util::file_name::file_name_for;
use linkcard_rfc::rfc::vcard::render_contact;
use linkcard_store::model::contact::{ContactRecord, NewContact};
use linkcard_store::store::ContactStore;
use serde::Serialize;

use crate::error::{ServiceError, ServiceResult};

/// Result of creating a contact link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    pub id: String,
    /// Absolute URL that downloads the vCard.
    pub link: String,
}

/// A rendered vCard ready to be sent as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardDownload {
    pub file_name: String,
    pub content_type: &'static str,
    pub body: String,
}

impl VCardDownload {
    /// Value for the `Content-Disposition` header.
    #[must_use]
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.file_name)
    }
}

/// ## Summary
/// Validates and normalizes a contact before it is stored.
///
/// The phone is required but its format is not checked. A blank name becomes
/// the default contact name.
///
/// ## Errors
/// Returns `ValidationError` if the phone is missing or blank.
pub fn prepare_contact(name: Option<&str>, phone: Option<&str>) -> ServiceResult<NewContact> {
    let phone = phone.map(str::trim).unwrap_or_default();
    if phone.is_empty() {
        return Err(ServiceError::ValidationError(
            PHONE_REQUIRED_MESSAGE.to_string(),
        ));
    }

    let name = name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_CONTACT_NAME);

    Ok(NewContact {
        name: name.to_string(),
        phone: phone.to_string(),
    })
}

/// ## Summary
/// Stores a contact and returns the link that downloads its vCard.
///
/// `origin` is the scheme and host the link is served from, e.g.
/// `https://links.example.com`.
///
/// ## Side Effects
/// Inserts a record into the contact store.
///
/// ## Errors
/// Returns `ValidationError` if the phone is missing or blank, or a store
/// error if the record cannot be saved.
#[tracing::instrument(skip(store, name, phone))]
pub fn create_contact_link(
    store: &dyn ContactStore,
    name: Option<&str>,
    phone: Option<&str>,
    origin: &str,
) -> ServiceResult<ContactLink> {
    let contact = prepare_contact(name, phone)?;
    let record = store.insert(contact)?;

    tracing::info!(id = %record.id, created_at = %record.created_at, "Contact link created");

    Ok(ContactLink {
        link: retrieval_url(origin, record.id.as_str()),
        id: record.id.into(),
    })
}

/// ## Summary
/// Looks up a stored contact.
///
/// ## Errors
/// Returns `NotFound` for ids that were never issued, or a store error.
pub fn resolve_contact(store: &dyn ContactStore, id: &str) -> ServiceResult<ContactRecord> {
    store
        .get(id)?
        .ok_or_else(|| ServiceError::NotFound(format!("contact {id}")))
}

/// ## Summary
/// Renders the vCard attachment for a stored contact.
#[must_use]
pub fn vcard_download(record: &ContactRecord) -> VCardDownload {
    let file_name = file_name_for(&record.name);

    tracing::info!(
        name = %record.name,
        file_name = %file_name,
        "vCard download"
    );

    VCardDownload {
        file_name,
        content_type: VCARD_CONTENT_TYPE,
        body: render_contact(&record.name, &record.phone),
    }
}

/// Builds the absolute download URL for a contact id.
#[must_use]
pub fn retrieval_url(origin: &str, id: &str) -> String {
    format!(
        "{}{VCARD_ROUTE_PREFIX}/{id}",
        origin.trim_end_matches('/')
    )
}
