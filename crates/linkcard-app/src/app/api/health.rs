use salvo::prelude::Json;
use salvo::{Router, handler};
use serde_json::json;

/// ## Summary
/// Liveness check. Always answers while the process can serve requests.
#[handler]
async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("healthcheck").get(healthcheck)
}
