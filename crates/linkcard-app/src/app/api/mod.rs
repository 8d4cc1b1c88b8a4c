mod contact;
mod health;
mod links;
mod util;

use salvo::Router;

// Re-export route constants from core
pub use linkcard_core::constants::{
    API_ROUTE_COMPONENT, GENERATE_ROUTE_COMPONENT, LINKS_ROUTE_COMPONENT, VCARD_ROUTE_COMPONENT,
};

/// ## Summary
/// Constructs the JSON API router under `/api`.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(health::routes())
        .push(contact::generate_routes())
        .push(links::routes())
}

/// ## Summary
/// Constructs the vCard download router under `/vcard`.
#[must_use]
pub fn vcard_routes() -> Router {
    contact::download_routes()
}
