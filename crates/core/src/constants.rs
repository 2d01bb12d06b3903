//! Shared constants for the core crate.

/// Default interval between marketplace refreshes, in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;

/// Total duration of the standard celebration timeline, in milliseconds.
/// The closing entry of [`crate::celebration::CelebrationTimeline::standard`]
/// sits at this offset.
pub const CELEBRATION_TOTAL_MS: u64 = 3000;

/// Capacity of the server-side event fan-out channel. Slow consumers
/// beyond this many buffered events start losing the oldest ones.
pub const EVENT_BUS_CAPACITY: usize = 256;
