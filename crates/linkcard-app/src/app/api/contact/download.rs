use salvo::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use salvo::{Depot, Request, Response, handler, http::StatusCode};
use tracing::error;

use crate::store_handler::get_store_from_depot;
use linkcard_core::constants::VCARD_NOT_FOUND_MESSAGE;
use linkcard_service::contact::service::{resolve_contact, vcard_download};
use linkcard_service::error::ServiceError;

fn render_not_found(res: &mut Response) {
    res.status_code(StatusCode::NOT_FOUND);
    res.render(VCARD_NOT_FOUND_MESSAGE);
}

/// ## Summary
/// GET /vcard/ - No id given, answered like an unknown id
#[handler]
pub async fn missing_id_handler(res: &mut Response) {
    render_not_found(res);
}

/// ## Summary
/// GET /vcard/{id} - Download the vCard for a stored contact
///
/// ## Errors
/// Returns HTTP 404 with a plain-text body if the id was never issued
/// Returns HTTP 500 if the contact store is unavailable
#[handler]
pub async fn download_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let id = req.param::<String>("id").unwrap_or_default();

    let store = match get_store_from_depot(depot) {
        Ok(s) => s,
        Err(e) => {
            error!(error = ?e, "Failed to get contact store from depot");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render("Internal server error");
            return;
        }
    };

    let record = match resolve_contact(store.as_ref(), &id) {
        Ok(record) => record,
        Err(ServiceError::NotFound(_)) => {
            tracing::debug!(id = %id, "vCard requested for unknown id");
            render_not_found(res);
            return;
        }
        Err(e) => {
            error!(error = ?e, "Failed to resolve contact");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render("Internal server error");
            return;
        }
    };

    let download = vcard_download(&record);

    let _ = res.add_header(CONTENT_TYPE, download.content_type, true);
    let _ = res.add_header(CONTENT_DISPOSITION, download.content_disposition(), true);
    res.status_code(StatusCode::OK);
    res.body(download.body);
}
