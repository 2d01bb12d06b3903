use serde_json::{json, Value};
use tokio::sync::broadcast;

use matchboard_core::{UiEvent, UiEventSink};

/// Canonical event names shared with the web frontend.
pub const LISTINGS_REFRESHED: &str = "listings:refreshed";
pub const CELEBRATION_START: &str = "celebration:start";
pub const CELEBRATION_AUDIO: &str = "celebration:audio";
pub const CELEBRATION_BURST: &str = "celebration:burst";
pub const CELEBRATION_CLEAR: &str = "celebration:clear";

/// Serializable envelope that carries event names and optional payloads.
#[derive(Clone, Debug)]
pub struct ServerEvent {
    pub name: &'static str,
    pub payload: Option<Value>,
}

impl ServerEvent {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            payload: None,
        }
    }

    pub fn with_payload(name: &'static str, payload: Value) -> Self {
        Self {
            name,
            payload: Some(payload),
        }
    }
}

/// Lightweight broadcast bus that fans out events to any connected clients.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ServerEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: ServerEvent) {
        // Lagging listeners are ignored to avoid blocking producers.
        let _ = self.sender.send(event);
    }
}

/// Bridges core UI events onto the broadcast bus, translating each into
/// the named envelope the frontend listens for.
#[derive(Clone)]
pub struct WebUiEventSink {
    bus: EventBus,
}

impl WebUiEventSink {
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }
}

impl UiEventSink for WebUiEventSink {
    fn emit(&self, event: UiEvent) {
        let server_event = match event {
            UiEvent::ListingsRefreshed {
                wish_count,
                offer_count,
                revision,
            } => ServerEvent::with_payload(
                LISTINGS_REFRESHED,
                json!({
                    "wishCount": wish_count,
                    "offerCount": offer_count,
                    "revision": revision,
                }),
            ),
            UiEvent::CelebrationStarted { pair } => {
                let percentage = pair.match_percentage();
                ServerEvent::with_payload(
                    CELEBRATION_START,
                    json!({
                        "pair": pair,
                        "matchPercentage": percentage,
                    }),
                )
            }
            UiEvent::CelebrationAudio { audio } => {
                ServerEvent::with_payload(CELEBRATION_AUDIO, json!({ "audio": audio }))
            }
            UiEvent::CelebrationBurst { burst } => {
                ServerEvent::with_payload(CELEBRATION_BURST, json!({ "burst": burst }))
            }
            UiEvent::CelebrationCleared => ServerEvent::new(CELEBRATION_CLEAR),
        };
        self.bus.publish(server_event);
    }
}
