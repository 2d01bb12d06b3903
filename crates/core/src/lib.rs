//! Core orchestration logic for the matchboard server.
//!
//! This crate owns the listing cache, the marketplace poller, match
//! detection, and the celebration sequencer. It is transport-agnostic:
//! everything user-facing goes through the [`events::UiEventSink`] trait,
//! which the server wires to its SSE fan-out.

pub mod celebration;
pub mod constants;
pub mod errors;
pub mod events;
pub mod listings;
pub mod matching;

pub use celebration::{
    AudioAsset, BurstPalette, BurstSpec, CelebrationAssets, CelebrationSequencer,
    CelebrationStatus, CelebrationTimeline, FsAssetLoader, StaticAssets,
};
pub use errors::{Error, Result};
pub use events::{MockUiEventSink, NoOpUiEventSink, UiEvent, UiEventSink};
pub use listings::{ListingPoller, ListingSnapshot, ListingStore, PollerConfig, PollerHandle};
pub use matching::{detect_new_match, CelebratedMatches, MatchKey, MatchPair};
