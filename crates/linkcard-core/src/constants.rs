/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const GENERATE_ROUTE_COMPONENT: &str = "generate";
pub const LINKS_ROUTE_COMPONENT: &str = "links";
pub const VCARD_ROUTE_COMPONENT: &str = "vcard";
pub const VCARD_ROUTE_PREFIX: &str = const_str::concat!("/", VCARD_ROUTE_COMPONENT);

/// Display name stored when a contact is created without one.
pub const DEFAULT_CONTACT_NAME: &str = "My Contact";

/// Message returned when a contact link is requested without a phone number.
pub const PHONE_REQUIRED_MESSAGE: &str = "Phone number is required.";

/// Body of the 404 returned for unknown vCard ids.
pub const VCARD_NOT_FOUND_MESSAGE: &str = "vCard not found or expired.";

pub const VCARD_CONTENT_TYPE: &str = "text/vcard; charset=utf-8";
