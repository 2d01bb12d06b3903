use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use matchboard_core::constants::EVENT_BUS_CAPACITY;
use matchboard_core::{CelebrationSequencer, FsAssetLoader, ListingStore, UiEventSink};
use matchboard_marketplace::{HttpMarketplaceClient, MarketplaceApi};

use crate::config::Config;
use crate::events::{EventBus, WebUiEventSink};

pub struct AppState {
    pub marketplace: Arc<dyn MarketplaceApi>,
    pub listing_store: Arc<ListingStore>,
    pub sequencer: CelebrationSequencer,
    pub assets: Arc<FsAssetLoader>,
    pub ui_sink: Arc<dyn UiEventSink>,
    pub event_bus: EventBus,
}

pub fn init_tracing() {
    let log_format = std::env::var("MB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let marketplace: Arc<dyn MarketplaceApi> =
        Arc::new(HttpMarketplaceClient::new(&config.marketplace_api_url)?);
    let listing_store = Arc::new(ListingStore::new());

    let event_bus = EventBus::new(EVENT_BUS_CAPACITY);
    let ui_sink: Arc<dyn UiEventSink> = Arc::new(WebUiEventSink::new(event_bus.clone()));

    // Asset loading happens off the startup path; celebrations armed
    // before it finishes simply run without the missing pieces.
    let assets = Arc::new(FsAssetLoader::new(&config.assets_dir));
    {
        let assets = assets.clone();
        tokio::spawn(async move {
            assets.load().await;
        });
    }

    let sequencer = CelebrationSequencer::standard(assets.clone(), ui_sink.clone());

    Ok(Arc::new(AppState {
        marketplace,
        listing_store,
        sequencer,
        assets,
        ui_sink,
        event_bus,
    }))
}
