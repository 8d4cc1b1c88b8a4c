use std::collections::BTreeMap;

use salvo::{Depot, Request, Response, Router, handler, http::StatusCode, writing::Json};
use serde::Serialize;
use tracing::error;

use super::LINKS_ROUTE_COMPONENT;
use super::util::{ErrorResponse, parse_json_body};
use crate::config::get_config_from_depot;
use linkcard_service::links::{LinkContext, OutputLink, build_links};

/// ## Summary
/// Generated links response payload
#[derive(Debug, Serialize)]
pub struct LinksResponse {
    pub links: Vec<OutputLink>,
}

/// ## Summary
/// POST /api/links - Build deep links for a submitted contact form
///
/// The body is a JSON object of form field names to raw values. Fields that
/// are blank or cannot be turned into a link are left out of the response.
/// An empty payload is treated as an empty form.
///
/// ## Errors
/// Returns HTTP 400 if the body is not a JSON object of strings
/// Returns HTTP 500 if the configuration is unavailable
#[handler]
async fn links_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let fields: BTreeMap<String, String> = match parse_json_body(req).await {
        Ok(f) => f,
        Err(e) => {
            error!(error = ?e, "Failed to parse links request");
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorResponse::new("Invalid request body")));
            return;
        }
    };

    let config = match get_config_from_depot(depot) {
        Ok(c) => c,
        Err(e) => {
            error!(error = ?e, "Failed to get config from depot");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse::new("Internal server error")));
            return;
        }
    };

    let ctx = LinkContext::from(&config.links);
    let links = build_links(&fields, &ctx);

    tracing::debug!(
        submitted = fields.len(),
        generated = links.len(),
        "Links generated"
    );

    res.status_code(StatusCode::OK);
    res.render(Json(LinksResponse { links }));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(LINKS_ROUTE_COMPONENT).post(links_handler)
}
