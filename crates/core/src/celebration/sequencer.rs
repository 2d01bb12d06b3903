//! Drives a celebration from arm to close.
//!
//! One spawned task walks the timeline and emits effects; arming while a
//! celebration is running is a no-op, and shutdown is a single abort. The
//! sequencer is a cheap clone-able handle, shared between the poll loop
//! (which arms it) and the server (which reads its status).

use std::sync::{Arc, Mutex};

use log::{debug, info};
use serde::Serialize;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

use crate::events::{UiEvent, UiEventSink};
use crate::matching::MatchPair;

use super::assets::{AudioAsset, BurstPalette, CelebrationAssets};
use super::timeline::{CelebrationTimeline, EffectKind};

/// Handle to the celebration state machine.
#[derive(Clone)]
pub struct CelebrationSequencer {
    inner: Arc<SequencerInner>,
}

struct SequencerInner {
    timeline: CelebrationTimeline,
    assets: Arc<dyn CelebrationAssets>,
    sink: Arc<dyn UiEventSink>,
    state: Mutex<SequencerState>,
}

#[derive(Default)]
struct SequencerState {
    running: bool,
    pair: Option<MatchPair>,
    task: Option<JoinHandle<()>>,
}

/// Snapshot of the sequencer for the status endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct CelebrationStatus {
    pub active: bool,
    pub pair: Option<MatchPair>,
}

impl CelebrationSequencer {
    pub fn new(
        timeline: CelebrationTimeline,
        assets: Arc<dyn CelebrationAssets>,
        sink: Arc<dyn UiEventSink>,
    ) -> Self {
        Self {
            inner: Arc::new(SequencerInner {
                timeline,
                assets,
                sink,
                state: Mutex::new(SequencerState::default()),
            }),
        }
    }

    /// Sequencer with the stock timeline.
    pub fn standard(assets: Arc<dyn CelebrationAssets>, sink: Arc<dyn UiEventSink>) -> Self {
        Self::new(CelebrationTimeline::standard(), assets, sink)
    }

    /// Start celebrating `pair`. Returns `false` without side effects when
    /// a celebration is already running; the caller decides whether to
    /// retry the pairing on a later poll.
    ///
    /// Asset readiness is sampled here, once: a load that completes while
    /// the timeline runs applies from the next celebration.
    pub fn arm(&self, pair: MatchPair) -> bool {
        let mut state = self.inner.state.lock().unwrap();
        if state.running {
            debug!("Celebration already running, ignoring pairing {:?}", pair.key());
            return false;
        }

        let audio = self.inner.assets.audio();
        let bursts = self.inner.assets.bursts();

        info!(
            "Celebrating match of wish {} and offer {}",
            pair.wish.id, pair.offer.id
        );
        state.running = true;
        state.pair = Some(pair.clone());

        let armed_at = Instant::now();
        state.task = Some(tokio::spawn(run_timeline(
            self.inner.clone(),
            pair,
            audio,
            bursts,
            armed_at,
        )));
        true
    }

    pub fn status(&self) -> CelebrationStatus {
        let state = self.inner.state.lock().unwrap();
        CelebrationStatus {
            active: state.running,
            pair: state.pair.clone(),
        }
    }

    /// Abort any running timeline and return to idle. No close event is
    /// emitted; this is for teardown, when nobody is listening anymore.
    pub fn shutdown(&self) {
        let mut state = self.inner.state.lock().unwrap();
        if let Some(task) = state.task.take() {
            task.abort();
        }
        if state.running {
            debug!("Celebration aborted mid-timeline");
        }
        state.running = false;
        state.pair = None;
    }
}

/// Walk the timeline, sleeping to each entry's offset relative to the
/// arming instant. Offsets are absolute deadlines, so emit-side delays do
/// not accumulate drift.
async fn run_timeline(
    inner: Arc<SequencerInner>,
    pair: MatchPair,
    audio: Option<AudioAsset>,
    bursts: Option<BurstPalette>,
    armed_at: Instant,
) {
    let entries = inner.timeline.entries().to_vec();
    for entry in entries {
        sleep_until(armed_at + entry.offset).await;
        match entry.effect {
            EffectKind::ModalOpen => {
                inner.sink.emit(UiEvent::celebration_started(pair.clone()));
            }
            EffectKind::Audio => match audio.clone() {
                Some(asset) => inner.sink.emit(UiEvent::celebration_audio(asset)),
                None => debug!("Audio cue not ready, celebration runs silent"),
            },
            EffectKind::Burst(index) => {
                match bursts.as_ref().and_then(|palette| palette.get(index)) {
                    Some(spec) => inner.sink.emit(UiEvent::celebration_burst(spec.clone())),
                    None => debug!("Burst {} not ready, skipping", index),
                }
            }
            EffectKind::ModalClose => {
                let mut state = inner.state.lock().unwrap();
                state.running = false;
                state.pair = None;
                state.task = None;
                drop(state);
                inner.sink.emit(UiEvent::celebration_cleared());
            }
        }
    }
}
