mod download;
mod generate;

use salvo::Router;

use super::{GENERATE_ROUTE_COMPONENT, VCARD_ROUTE_COMPONENT};

#[must_use]
pub fn generate_routes() -> Router {
    Router::with_path(GENERATE_ROUTE_COMPONENT).post(generate::generate_handler)
}

#[must_use]
pub fn download_routes() -> Router {
    Router::with_path(VCARD_ROUTE_COMPONENT)
        .get(download::missing_id_handler)
        .push(Router::with_path("{id}").get(download::download_handler))
}
