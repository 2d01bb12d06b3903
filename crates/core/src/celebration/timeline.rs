//! Declarative schedule for a celebration.
//!
//! A timeline is a list of effects with offsets relative to the moment the
//! sequencer arms. Keeping the schedule as data means one task can drive
//! the whole celebration and cancellation is a single abort, instead of a
//! pile of independent timers that each need tracking.

use std::time::Duration;

use crate::constants::CELEBRATION_TOTAL_MS;
use crate::errors::{Error, Result};

/// What happens at a timeline entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    /// Open the celebration modal and announce the pairing.
    ModalOpen,
    /// Play the audio cue.
    Audio,
    /// Fire the confetti burst at this index of the palette.
    Burst(usize),
    /// Close the modal and end the celebration.
    ModalClose,
}

/// One scheduled effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineEntry {
    /// Delay from the arming instant.
    pub offset: Duration,
    pub effect: EffectKind,
}

impl TimelineEntry {
    pub fn new(offset_ms: u64, effect: EffectKind) -> Self {
        Self {
            offset: Duration::from_millis(offset_ms),
            effect,
        }
    }
}

/// An ordered, validated effect schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CelebrationTimeline {
    entries: Vec<TimelineEntry>,
}

impl CelebrationTimeline {
    /// Build a timeline from entries.
    ///
    /// Entries must be non-empty, sorted by offset, and end with exactly
    /// one [`EffectKind::ModalClose`]; the close is what returns the
    /// sequencer to idle, so a schedule without one would celebrate
    /// forever.
    pub fn new(entries: Vec<TimelineEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::InvalidTimeline("timeline has no entries".to_string()));
        }

        for window in entries.windows(2) {
            if window[0].offset > window[1].offset {
                return Err(Error::InvalidTimeline(
                    "entry offsets must be non-decreasing".to_string(),
                ));
            }
        }

        let close_count = entries
            .iter()
            .filter(|entry| entry.effect == EffectKind::ModalClose)
            .count();
        if close_count != 1 {
            return Err(Error::InvalidTimeline(format!(
                "timeline needs exactly one closing entry, found {}",
                close_count
            )));
        }
        if entries.last().map(|entry| entry.effect) != Some(EffectKind::ModalClose) {
            return Err(Error::InvalidTimeline(
                "closing entry must come last".to_string(),
            ));
        }

        Ok(Self { entries })
    }

    /// The stock celebration: modal and audio up front, five confetti
    /// bursts over the first second, close at three seconds.
    pub fn standard() -> Self {
        let entries = vec![
            TimelineEntry::new(0, EffectKind::ModalOpen),
            TimelineEntry::new(0, EffectKind::Audio),
            TimelineEntry::new(400, EffectKind::Burst(0)),
            TimelineEntry::new(600, EffectKind::Burst(1)),
            TimelineEntry::new(600, EffectKind::Burst(2)),
            TimelineEntry::new(800, EffectKind::Burst(3)),
            TimelineEntry::new(1000, EffectKind::Burst(4)),
            TimelineEntry::new(CELEBRATION_TOTAL_MS, EffectKind::ModalClose),
        ];
        // The constant schedule above always passes validation.
        Self { entries }
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// Offset of the closing entry.
    pub fn total_duration(&self) -> Duration {
        self.entries
            .last()
            .map(|entry| entry.offset)
            .unwrap_or(Duration::ZERO)
    }
}

impl Default for CelebrationTimeline {
    fn default() -> Self {
        Self::standard()
    }
}
