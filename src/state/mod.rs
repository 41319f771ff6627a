//! State management for CoreUI components
//!
//! 1. [`State<T>`] - a shared cell holding one value that notifies subscribers on write
//! 2. [`Effect<D>`] - a dependency tracker that runs its body only when its inputs change

mod effect;

pub use effect::Effect;

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

// Subscribers are called after every write
type SubscriberCallback = Arc<dyn Fn() + Send + Sync>;

/// A piece of component-owned state
///
/// Clones share the same cell, so event listeners rendered by a component can
/// write state the component reads on its next render.
pub struct State<T> {
    value: Arc<Mutex<T>>,
    subscribers: Arc<Mutex<Vec<SubscriberCallback>>>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("value", &*lock(&self.value))
            .field("subscribers", &lock(&self.subscribers).len())
            .finish()
    }
}

// A poisoned cell still holds a valid value: state writes never panic midway
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<T: Clone + Send + Sync + 'static> State<T> {
    /// Create a new state cell
    pub fn new(initial: T) -> Self {
        Self {
            value: Arc::new(Mutex::new(initial)),
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get current value
    pub fn get(&self) -> T {
        lock(&self.value).clone()
    }

    /// Set new value and notify subscribers
    pub fn set(&self, value: T) {
        *lock(&self.value) = value;
        self.notify();
    }

    /// Update value with a function, returning the new value
    pub fn update<F>(&self, f: F) -> T
    where
        F: FnOnce(&T) -> T,
    {
        let new_value = {
            let mut value = lock(&self.value);
            let new_value = f(&value);
            *value = new_value.clone();
            new_value
        };
        self.notify();
        new_value
    }

    /// Subscribe to writes
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        lock(&self.subscribers).push(Arc::new(callback));
    }

    fn notify(&self) {
        let subscribers: Vec<SubscriberCallback> = lock(&self.subscribers).clone();
        for subscriber in subscribers {
            subscriber();
        }
    }
}
