//! Error types for component operations

use std::error::Error;
use std::fmt;

use crate::component::node::NodeId;
use crate::component::LifecyclePhase;

/// Errors that can occur during component operations
#[derive(Debug)]
pub enum ComponentError {
    /// Invalid lifecycle transition
    InvalidLifecycleTransition(LifecyclePhase, String),

    /// No node with this id exists in the mounted tree
    NodeNotFound(NodeId),

    /// Error updating component
    UpdateError(String),
}

impl fmt::Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLifecycleTransition(phase, operation) => write!(
                f,
                "Invalid lifecycle transition: cannot {operation} while in {phase:?} phase"
            ),
            Self::NodeNotFound(id) => write!(f, "Node {id} not found in the mounted tree"),
            Self::UpdateError(msg) => write!(f, "Error updating component: {msg}"),
        }
    }
}

impl Error for ComponentError {}
