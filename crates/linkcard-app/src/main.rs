use std::sync::Arc;

use linkcard_app::app::service_router;
use linkcard_core::config::load_config;
use linkcard_store::store::{ContactStore, MemoryContactStore};
use salvo::Listener;
use salvo::conn::TcpListener;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting linkcard server");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    match config.links.country_code() {
        Some(code) => tracing::info!(
            country_code = %code,
            "Phone numbers without a leading + will be prefixed with the default country code"
        ),
        None => tracing::info!("Phone numbers without a leading + will be rejected"),
    }

    // Contact links live in process memory only and are never evicted.
    let store: Arc<dyn ContactStore> = Arc::new(MemoryContactStore::new());

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = service_router(Arc::new(config), store);

    tracing::info!("Server listening on {bind_addr}");

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}
