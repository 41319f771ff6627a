// Core module of the CoreUI design-system kit
pub mod component;
pub mod events;
pub mod renderer;
pub mod state;
pub mod testing;

pub mod kit;

/// Version of the CoreUI kit
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Re-export of common types for convenience
pub mod prelude {
    pub use crate::component::{
        callback,
        props::{PropValidationError, PropValidator},
        Callback, Component, ComponentError, Context, LifecycleManager, LifecyclePhase, Node,
        NodeId, NodeRef, Props,
    };
    pub use crate::events::{EventKind, LifecycleEvent, UiEvent};
    pub use crate::kit::prelude::*;
    pub use crate::renderer::{RenderOptions, Renderer};
    pub use crate::state::{Effect, State};
    pub use crate::testing::Screen;
}

/// Initialize the CoreUI kit
pub fn init() -> Result<(), Error> {
    log::info!("CoreUI kit v{VERSION}");
    Ok(())
}

/// Errors that can occur in the CoreUI kit
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Rendering error: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("Component error: {0}")]
    Component(#[from] component::ComponentError),

    #[error("Invalid props: {0}")]
    Props(#[from] component::props::PropValidationError),
}
