use salvo::{Depot, Request, Response, handler, http::StatusCode, writing::Json};
use serde::Deserialize;
use tracing::error;

use super::super::util::{ErrorResponse, parse_json_body, request_origin};
use crate::config::get_config_from_depot;
use crate::store_handler::get_store_from_depot;
use linkcard_service::contact::service::create_contact_link;
use linkcard_service::error::ServiceError;

/// ## Summary
/// Create contact link request payload
#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// ## Summary
/// POST /api/generate - Store a contact and return its vCard download link
///
/// The payload is read as JSON whatever its content type; an empty payload
/// counts as a request without a phone.
///
/// ## Side Effects
/// - Inserts the contact into the process-wide contact store
///
/// ## Errors
/// Returns HTTP 400 if the body is not JSON or the phone is missing or blank
/// Returns HTTP 500 if the contact store is unavailable
#[handler]
pub async fn generate_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    tracing::debug!("Processing generate contact link request");

    let generate_req: GenerateRequest = match parse_json_body(req).await {
        Ok(r) => r,
        Err(e) => {
            error!(error = ?e, "Failed to parse generate request");
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorResponse::new("Invalid request body")));
            return;
        }
    };

    let (config, store) = match (get_config_from_depot(depot), get_store_from_depot(depot)) {
        (Ok(config), Ok(store)) => (config, store),
        (Err(e), _) | (_, Err(e)) => {
            error!(error = ?e, "Failed to get application state from depot");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse::new("Internal server error")));
            return;
        }
    };

    let origin = request_origin(req, &config.server);

    match create_contact_link(
        store.as_ref(),
        generate_req.name.as_deref(),
        generate_req.phone.as_deref(),
        &origin,
    ) {
        Ok(link) => {
            res.status_code(StatusCode::OK);
            res.render(Json(link));
        }
        Err(ServiceError::ValidationError(message)) => {
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorResponse::new(message)));
        }
        Err(e) => {
            error!(error = ?e, "Failed to create contact link");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse::new("Internal server error")));
        }
    }
}
