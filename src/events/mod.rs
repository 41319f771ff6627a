//! Event system for CoreUI
//!
//! - [`UiEvent`]: user interactions routed by the host to node listeners
//! - [`LifecycleEvent`]: notifications the host emits through a component's context
//! - [`EventEmitter`]: type-erased publish/subscribe used for the latter

pub mod emitter;
pub mod event;

pub use emitter::EventEmitter;
pub use event::{ClickEvent, Event, EventKind, InputEvent, LifecycleEvent, UiEvent};
