use serde::{Deserialize, Serialize};

use crate::celebration::{AudioAsset, BurstSpec};
use crate::matching::MatchPair;

/// Events the core emits towards the user interface.
///
/// The core never talks to a browser directly; it hands these to a
/// [`crate::events::UiEventSink`] and the server decides how to deliver
/// them. Serialized with a `type` tag so consumers can dispatch without
/// inspecting the payload shape.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    /// The listing cache was replaced with a fresh snapshot.
    ListingsRefreshed {
        wish_count: usize,
        offer_count: usize,
        revision: u64,
    },
    /// A new match was detected and its celebration just started.
    CelebrationStarted { pair: MatchPair },
    /// The celebration audio cue should play now.
    CelebrationAudio { audio: AudioAsset },
    /// One confetti burst of the running celebration.
    CelebrationBurst { burst: BurstSpec },
    /// The celebration finished (or was torn down) and the modal closes.
    CelebrationCleared,
}

impl UiEvent {
    pub fn listings_refreshed(wish_count: usize, offer_count: usize, revision: u64) -> Self {
        Self::ListingsRefreshed {
            wish_count,
            offer_count,
            revision,
        }
    }

    pub fn celebration_started(pair: MatchPair) -> Self {
        Self::CelebrationStarted { pair }
    }

    pub fn celebration_audio(audio: AudioAsset) -> Self {
        Self::CelebrationAudio { audio }
    }

    pub fn celebration_burst(burst: BurstSpec) -> Self {
        Self::CelebrationBurst { burst }
    }

    pub fn celebration_cleared() -> Self {
        Self::CelebrationCleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchboard_marketplace::{OfferRecord, WishRecord};

    #[test]
    fn test_listings_refreshed_serialization() {
        let event = UiEvent::listings_refreshed(3, 5, 12);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "listings_refreshed");
        assert_eq!(json["wish_count"], 3);
        assert_eq!(json["offer_count"], 5);
        assert_eq!(json["revision"], 12);
    }

    #[test]
    fn test_celebration_started_carries_pair() {
        let wish = WishRecord::new(7, "vintage synth");
        let offer = OfferRecord::new(21, "synth for sale");
        let event = UiEvent::celebration_started(MatchPair::new(wish, offer));
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "celebration_started");
        assert_eq!(json["pair"]["wish"]["id"], 7);
        assert_eq!(json["pair"]["offer"]["id"], 21);
    }

    #[test]
    fn test_celebration_cleared_round_trip() {
        let json = serde_json::to_string(&UiEvent::celebration_cleared()).unwrap();
        let parsed: UiEvent = serde_json::from_str(&json).unwrap();
        assert!(matches!(parsed, UiEvent::CelebrationCleared));
    }
}
