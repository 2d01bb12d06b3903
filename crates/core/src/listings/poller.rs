//! Periodic marketplace refresh loop.
//!
//! One task owns the whole poll cycle: fetch both collections, swap the
//! store, announce the refresh, and hand any newly detected match to the
//! sequencer. Ticks are serialized; a slow fetch delays the next tick
//! instead of overlapping with it.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use matchboard_marketplace::MarketplaceApi;

use crate::celebration::CelebrationSequencer;
use crate::constants::DEFAULT_POLL_INTERVAL_MS;
use crate::errors::Result;
use crate::events::{UiEvent, UiEventSink};
use crate::matching::{detect_new_match, CelebratedMatches};

use super::store::ListingStore;

#[derive(Clone, Copy, Debug)]
pub struct PollerConfig {
    /// Time between refresh attempts.
    pub interval: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

pub struct ListingPoller;

impl ListingPoller {
    /// Start the refresh loop. The first refresh runs immediately, then
    /// one per interval until the handle is stopped or dropped.
    pub fn spawn(
        api: Arc<dyn MarketplaceApi>,
        store: Arc<ListingStore>,
        sequencer: CelebrationSequencer,
        sink: Arc<dyn UiEventSink>,
        config: PollerConfig,
    ) -> PollerHandle {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(async move {
            info!("Listing poller started, interval {:?}", config.interval);
            let mut ticker = interval(config.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut celebrated = CelebratedMatches::new();

            loop {
                tokio::select! {
                    _ = shutdown_rx.changed() => break,
                    _ = async {
                        ticker.tick().await;
                        if let Err(err) =
                            refresh_once(&*api, &store, &sequencer, &*sink, &mut celebrated).await
                        {
                            warn!("Listing refresh failed, keeping previous snapshot: {}", err);
                        }
                    } => {}
                }
            }
            info!("Listing poller stopped");
        });

        PollerHandle {
            shutdown: shutdown_tx,
            task,
        }
    }
}

/// Controls a running poll loop. Dropping the handle stops the loop too;
/// [`stop`](PollerHandle::stop) additionally waits for it to wind down.
pub struct PollerHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}

/// One full refresh cycle.
///
/// Both fetches must succeed or the previous snapshot stays; a refresh is
/// never half-applied. Detection runs on the fetched lists before they
/// move into the store. A pairing the sequencer turns down (because a
/// celebration is already running) is not marked celebrated, so a later
/// tick picks it up again.
async fn refresh_once(
    api: &dyn MarketplaceApi,
    store: &ListingStore,
    sequencer: &CelebrationSequencer,
    sink: &dyn UiEventSink,
    celebrated: &mut CelebratedMatches,
) -> Result<u64> {
    let (wishes, offers) = tokio::join!(api.fetch_wishes(), api.fetch_offers());
    let wishes = wishes?;
    let offers = offers?;

    let detected = detect_new_match(&wishes, &offers);

    let wish_count = wishes.len();
    let offer_count = offers.len();
    let revision = store.replace(wishes, offers);
    debug!(
        "Listings refreshed: {} wishes, {} offers, revision {}",
        wish_count, offer_count, revision
    );
    sink.emit(UiEvent::listings_refreshed(wish_count, offer_count, revision));

    if let Some(pair) = detected {
        let key = pair.key();
        if celebrated.contains(&key) {
            debug!("Pairing {:?} already celebrated, staying quiet", key);
        } else if sequencer.arm(pair) {
            celebrated.record(key);
        }
    }

    Ok(revision)
}
