//! Event emitter for component events

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::events::Event;

/// Type for event handler callbacks
type EventCallback = Box<dyn Fn(&dyn Event) + Send + Sync>;

type HandlerMap = HashMap<TypeId, Vec<Arc<EventCallback>>>;

/// Event emitter for handling component events
#[derive(Clone)]
pub struct EventEmitter {
    /// Event handlers grouped by event type
    handlers: Arc<Mutex<HandlerMap>>,
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("handlers", &"[EventHandlers]")
            .finish()
    }
}

impl EventEmitter {
    /// Create a new event emitter
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn handlers(&self) -> MutexGuard<'_, HandlerMap> {
        self.handlers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Register an event handler
    pub fn on<E: Event>(&self, handler: impl Fn(&E) + Send + Sync + 'static) {
        let callback: EventCallback = Box::new(move |event| {
            if let Some(typed_event) = event.as_any().downcast_ref::<E>() {
                handler(typed_event);
            }
        });

        self.handlers()
            .entry(TypeId::of::<E>())
            .or_default()
            .push(Arc::new(callback));
    }

    /// Emit an event
    pub fn emit<E: Event>(&self, event: &E) {
        // Handlers run outside the lock so they may register further handlers
        let handlers = self
            .handlers()
            .get(&TypeId::of::<E>())
            .cloned()
            .unwrap_or_default();

        for handler in handlers {
            handler(event);
        }
    }
}

impl Default for EventEmitter {
    fn default() -> Self {
        Self::new()
    }
}
