//! Event types for the CoreUI event system

use std::any::Any;

use serde::{Deserialize, Serialize};

use crate::component::node::NodeId;

/// Generic event trait
pub trait Event: 'static {
    /// Convert to Any for downcasting
    fn as_any(&self) -> &dyn Any;
}

/// Any 'static value can be emitted
impl<T: Any> Event for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Kinds of user interaction a node can listen to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Pointer click or keyboard activation
    Click,
    /// Text entry into a field
    Input,
}

/// Click or activation on an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    /// Element the click was delivered to
    pub target: NodeId,
}

/// Text typed into a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    /// Element receiving the text
    pub target: NodeId,
    /// Value the user produced
    pub value: String,
}

/// A user interaction routed to a node listener
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Click(ClickEvent),
    Input(InputEvent),
}

impl UiEvent {
    /// Click on `target`
    pub fn click(target: NodeId) -> Self {
        Self::Click(ClickEvent { target })
    }

    /// Text entry into `target`
    pub fn input(target: NodeId, value: impl Into<String>) -> Self {
        Self::Input(InputEvent {
            target,
            value: value.into(),
        })
    }

    /// Which listener slot this event goes to
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Click(_) => EventKind::Click,
            Self::Input(_) => EventKind::Input,
        }
    }

    /// Element the event is delivered to
    pub fn target(&self) -> NodeId {
        match self {
            Self::Click(event) => event.target,
            Self::Input(event) => event.target,
        }
    }
}

/// Lifecycle notifications emitted by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Component was mounted
    Mount,
    /// Component re-rendered with new props
    Update,
    /// Component re-rendered after its own state changed
    StateChange,
    /// Component was unmounted
    Unmount,
}
