use std::sync::{Arc, Mutex};

use super::ui_event::UiEvent;

/// Outbound channel for UI-facing events.
///
/// Implementations must tolerate being called from any task and must not
/// block: the sequencer emits from inside its timeline task, the poller
/// from its refresh loop.
pub trait UiEventSink: Send + Sync {
    fn emit(&self, event: UiEvent);
}

/// Sink that drops every event. Useful for headless runs and tests that
/// do not care about UI output.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpUiEventSink;

impl UiEventSink for NoOpUiEventSink {
    fn emit(&self, _event: UiEvent) {}
}

/// Sink that records every event for later inspection.
#[derive(Clone, Debug, Default)]
pub struct MockUiEventSink {
    events: Arc<Mutex<Vec<UiEvent>>>,
}

impl MockUiEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events emitted so far, in order.
    pub fn events(&self) -> Vec<UiEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl UiEventSink for MockUiEventSink {
    fn emit(&self, event: UiEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_sink_records_in_order() {
        let sink = MockUiEventSink::new();
        assert!(sink.is_empty());

        sink.emit(UiEvent::listings_refreshed(1, 2, 1));
        sink.emit(UiEvent::celebration_cleared());

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], UiEvent::ListingsRefreshed { .. }));
        assert!(matches!(events[1], UiEvent::CelebrationCleared));

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_mock_sink_clones_share_storage() {
        let sink = MockUiEventSink::new();
        let clone = sink.clone();
        clone.emit(UiEvent::celebration_cleared());
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_noop_sink_discards() {
        let sink = NoOpUiEventSink;
        sink.emit(UiEvent::celebration_cleared());
    }
}
