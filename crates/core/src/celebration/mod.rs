pub mod assets;
pub mod sequencer;
pub mod timeline;

pub use assets::{
    AssetError, AudioAsset, BurstOrigin, BurstPalette, BurstSpec, CelebrationAssets, FsAssetLoader,
    StaticAssets,
};
pub use sequencer::{CelebrationSequencer, CelebrationStatus};
pub use timeline::{CelebrationTimeline, EffectKind, TimelineEntry};
