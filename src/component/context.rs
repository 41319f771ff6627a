//! Context handed to components and the callback type used for props

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::component::LifecyclePhase;
use crate::events::EventEmitter;
use crate::state::State;

/// Context passed to components providing access to state and events
#[derive(Clone)]
pub struct Context {
    /// Event emitter for lifecycle notifications
    events: EventEmitter,

    /// Set whenever a state cell created through this context changes
    dirty: Arc<AtomicBool>,

    /// Current lifecycle phase
    lifecycle_phase: LifecyclePhase,
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("events", &self.events)
            .field("dirty", &self.dirty.load(Ordering::SeqCst))
            .field("lifecycle_phase", &self.lifecycle_phase)
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new context
    pub fn new() -> Self {
        Self {
            events: EventEmitter::new(),
            dirty: Arc::new(AtomicBool::new(false)),
            lifecycle_phase: LifecyclePhase::Created,
        }
    }

    /// Create a state cell owned by the component.
    ///
    /// Writes to the cell mark the context dirty so the host knows to re-render
    /// after an interaction.
    pub fn state<T: Clone + Send + Sync + 'static>(&self, initial: T) -> State<T> {
        let state = State::new(initial);
        let dirty = self.dirty.clone();
        state.subscribe(move || dirty.store(true, Ordering::SeqCst));
        state
    }

    /// Get event emitter
    pub fn events(&self) -> &EventEmitter {
        &self.events
    }

    /// Current lifecycle phase
    pub fn lifecycle_phase(&self) -> LifecyclePhase {
        self.lifecycle_phase
    }

    /// Set the current lifecycle phase
    pub fn set_lifecycle_phase(&mut self, phase: LifecyclePhase) {
        self.lifecycle_phase = phase;
    }

    /// Clear the dirty flag, returning whether it was set
    pub(crate) fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }
}

/// A callback function that can be passed as a prop
pub struct Callback<Args, Ret = ()> {
    /// The function to call
    func: Arc<dyn Fn(Args) -> Ret + Send + Sync>,
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
    fn clone(&self) -> Self {
        Self {
            func: self.func.clone(),
        }
    }
}

impl<Args, Ret> fmt::Debug for Callback<Args, Ret> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

impl<Args, Ret> Callback<Args, Ret> {
    /// Create a new callback
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(Args) -> Ret + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    /// Call the callback with the given arguments
    pub fn call(&self, args: Args) -> Ret {
        (self.func)(args)
    }

    /// Whether both handles point at the same function
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

/// Convenience function for creating a callback
pub fn callback<F, Args, Ret>(func: F) -> Callback<Args, Ret>
where
    F: Fn(Args) -> Ret + Send + Sync + 'static,
{
    Callback::new(func)
}
