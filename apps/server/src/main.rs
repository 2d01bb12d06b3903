mod api;
mod config;
mod error;
mod events;
mod main_lib;

use api::app_router;
use config::Config;
use main_lib::{build_state, init_tracing};
use matchboard_core::{ListingPoller, PollerConfig};
use tower_http::services::{ServeDir, ServeFile};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing();
    let state = build_state(&config).await?;

    // Background refresh loop; owns match detection and celebrations.
    let poller = ListingPoller::spawn(
        state.marketplace.clone(),
        state.listing_store.clone(),
        state.sequencer.clone(),
        state.ui_sink.clone(),
        PollerConfig {
            interval: config.poll_interval,
        },
    );

    let static_dir = std::path::PathBuf::from(&config.static_dir);
    let index_file = static_dir.join("index.html");
    let static_service = ServeDir::new(static_dir).fallback(ServeFile::new(index_file));
    let router = app_router(state.clone(), &config)
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .fallback_service(static_service);

    tracing::info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    poller.stop().await;
    state.sequencer.shutdown();
    Ok(())
}
