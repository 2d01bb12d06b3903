pub mod sink;
pub mod ui_event;

pub use sink::{MockUiEventSink, NoOpUiEventSink, UiEventSink};
pub use ui_event::UiEvent;
