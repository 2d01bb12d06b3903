//! Celebration assets: the audio cue and the confetti burst palette.
//!
//! Asset loading is fallible and decoupled from the sequencer. The
//! sequencer asks a [`CelebrationAssets`] implementation what is ready at
//! the moment it arms; anything missing is skipped for that celebration
//! while the rest of the timeline still runs.

use std::io;
use std::path::PathBuf;
use std::sync::RwLock;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File the loader looks for inside the assets directory.
const AUDIO_FILE_NAME: &str = "match-celebration.mp3";
/// Burst palette definition, JSON.
const BURSTS_FILE_NAME: &str = "bursts.json";
/// Route prefix the server mounts the assets directory under.
const ASSETS_ROUTE: &str = "/assets";
const DEFAULT_AUDIO_VOLUME: f64 = 0.8;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to read asset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse asset {path}: {message}")]
    Parse { path: String, message: String },
}

/// The audio cue, as the UI needs it: a servable URL plus playback volume.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioAsset {
    pub src: String,
    pub volume: f64,
}

impl AudioAsset {
    pub fn new(src: impl Into<String>, volume: f64) -> Self {
        Self {
            src: src.into(),
            volume,
        }
    }
}

/// Normalized screen position a burst originates from, 0.0..=1.0 on both
/// axes with the origin at the top left.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurstOrigin {
    pub x: f64,
    pub y: f64,
}

/// Parameters of one confetti burst, shaped for the frontend's confetti
/// renderer (hence the camelCase wire names).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurstSpec {
    pub particle_count: u32,
    /// Scatter angle in degrees.
    pub spread: u32,
    pub origin: BurstOrigin,
    pub colors: Vec<String>,
}

/// The ordered burst list a timeline's burst indices point into.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurstPalette {
    bursts: Vec<BurstSpec>,
}

const PALETTE_COLORS: [&str; 5] = ["#f43f5e", "#f59e0b", "#10b981", "#3b82f6", "#a855f7"];

fn standard_colors() -> Vec<String> {
    PALETTE_COLORS.iter().map(|c| c.to_string()).collect()
}

impl BurstPalette {
    pub fn new(bursts: Vec<BurstSpec>) -> Self {
        Self { bursts }
    }

    pub fn get(&self, index: usize) -> Option<&BurstSpec> {
        self.bursts.get(index)
    }

    pub fn len(&self) -> usize {
        self.bursts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bursts.is_empty()
    }

    /// The stock five-burst palette: a big center pop, a left/right pair,
    /// a wide follow-up, and a high finisher.
    pub fn standard() -> Self {
        let colors = standard_colors();
        Self::new(vec![
            BurstSpec {
                particle_count: 300,
                spread: 250,
                origin: BurstOrigin { x: 0.5, y: 0.6 },
                colors: colors.clone(),
            },
            BurstSpec {
                particle_count: 120,
                spread: 80,
                origin: BurstOrigin { x: 0.2, y: 0.7 },
                colors: colors.clone(),
            },
            BurstSpec {
                particle_count: 120,
                spread: 80,
                origin: BurstOrigin { x: 0.8, y: 0.7 },
                colors: colors.clone(),
            },
            BurstSpec {
                particle_count: 200,
                spread: 160,
                origin: BurstOrigin { x: 0.5, y: 0.5 },
                colors: colors.clone(),
            },
            BurstSpec {
                particle_count: 150,
                spread: 100,
                origin: BurstOrigin { x: 0.5, y: 0.3 },
                colors,
            },
        ])
    }
}

/// Read access to celebration assets.
///
/// `None` means "not ready": the sequencer samples both once when a
/// celebration arms and degrades gracefully around whatever is missing.
pub trait CelebrationAssets: Send + Sync {
    fn audio(&self) -> Option<AudioAsset>;
    fn bursts(&self) -> Option<BurstPalette>;
}

/// Compiled-in assets, always ready. Used by tests and headless setups
/// that have no asset directory to serve.
#[derive(Clone, Debug)]
pub struct StaticAssets {
    audio: AudioAsset,
    bursts: BurstPalette,
}

impl StaticAssets {
    pub fn standard() -> Self {
        Self {
            audio: AudioAsset::new(format!("{}/{}", ASSETS_ROUTE, AUDIO_FILE_NAME), DEFAULT_AUDIO_VOLUME),
            bursts: BurstPalette::standard(),
        }
    }
}

impl CelebrationAssets for StaticAssets {
    fn audio(&self) -> Option<AudioAsset> {
        Some(self.audio.clone())
    }

    fn bursts(&self) -> Option<BurstPalette> {
        Some(self.bursts.clone())
    }
}

/// Loads assets from a directory on disk, once, at startup.
///
/// Both slots start out not-ready and flip to ready when [`load`] finds
/// the backing file. A load failure is logged and leaves the slot
/// not-ready; celebrations still run without the affected asset.
///
/// [`load`]: FsAssetLoader::load
#[derive(Debug)]
pub struct FsAssetLoader {
    assets_dir: PathBuf,
    audio: RwLock<Option<AudioAsset>>,
    bursts: RwLock<Option<BurstPalette>>,
}

impl FsAssetLoader {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            audio: RwLock::new(None),
            bursts: RwLock::new(None),
        }
    }

    /// Probe the assets directory and mark whatever is present as ready.
    pub async fn load(&self) {
        match self.load_audio().await {
            Ok(asset) => {
                debug!("Audio cue ready at {}", asset.src);
                *self.audio.write().unwrap() = Some(asset);
            }
            Err(err) => warn!("Audio cue unavailable, celebrations run silent: {}", err),
        }

        match self.load_bursts().await {
            Ok(palette) => {
                debug!("Burst palette ready with {} bursts", palette.len());
                *self.bursts.write().unwrap() = Some(palette);
            }
            Err(err) => warn!("Burst palette unavailable, celebrations run without confetti: {}", err),
        }
    }

    async fn load_audio(&self) -> Result<AudioAsset, AssetError> {
        let path = self.assets_dir.join(AUDIO_FILE_NAME);
        match tokio::fs::try_exists(&path).await {
            Ok(true) => Ok(AudioAsset::new(
                format!("{}/{}", ASSETS_ROUTE, AUDIO_FILE_NAME),
                DEFAULT_AUDIO_VOLUME,
            )),
            Ok(false) => Err(AssetError::NotFound(path.display().to_string())),
            Err(source) => Err(AssetError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    async fn load_bursts(&self) -> Result<BurstPalette, AssetError> {
        let path = self.assets_dir.join(BURSTS_FILE_NAME);
        let raw = tokio::fs::read_to_string(&path).await.map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                AssetError::NotFound(path.display().to_string())
            } else {
                AssetError::Io {
                    path: path.display().to_string(),
                    source,
                }
            }
        })?;

        let palette: BurstPalette =
            serde_json::from_str(&raw).map_err(|err| AssetError::Parse {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;
        if palette.is_empty() {
            return Err(AssetError::Parse {
                path: path.display().to_string(),
                message: "burst list is empty".to_string(),
            });
        }
        Ok(palette)
    }
}

impl CelebrationAssets for FsAssetLoader {
    fn audio(&self) -> Option<AudioAsset> {
        self.audio.read().unwrap().clone()
    }

    fn bursts(&self) -> Option<BurstPalette> {
        self.bursts.read().unwrap().clone()
    }
}
