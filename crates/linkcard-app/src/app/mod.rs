pub mod api;

use std::sync::Arc;

use salvo::Router;
use salvo::caching_headers::CachingHeaders;
use salvo::logging::Logger;
use salvo::serve_static::StaticDir;

use crate::config::{ConfigHandler, Settings};
use crate::store_handler::ContactStoreHandler;
use linkcard_store::store::ContactStore;

/// ## Summary
/// Builds the complete application router: shared state hoops, the API and
/// vCard routes, and the static UI when a directory is configured.
#[must_use]
pub fn service_router(settings: Arc<Settings>, store: Arc<dyn ContactStore>) -> Router {
    let static_dir = settings.server.static_dir().map(str::to_string);

    let mut router = Router::new()
        .hoop(Logger::new())
        .hoop(ContactStoreHandler { store })
        .hoop(ConfigHandler { settings })
        .push(api::routes())
        .push(api::vcard_routes());

    if let Some(dir) = static_dir {
        tracing::info!(dir = %dir, "Serving static UI");
        router = router.push(
            Router::with_path("{**path}")
                .hoop(CachingHeaders::new())
                .get(StaticDir::new([dir]).defaults("index.html")),
        );
    }

    router
}
