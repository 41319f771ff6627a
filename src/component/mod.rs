//! Component model for CoreUI
//!
//! This module contains the types and traits related to the component model,
//! including lifecycle management, state, props, and rendering.

mod context;
mod error;
mod lifecycle;
pub mod node;
pub mod props;


pub use context::{callback, Callback, Context};
pub use error::ComponentError;
pub use lifecycle::LifecycleManager;
pub use node::{Node, NodeId, NodeRef};

/// Lifecycle phase of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Component is created but not yet mounted
    Created,
    /// Component is being mounted
    Mounting,
    /// Component is fully mounted and operational
    Mounted,
    /// Component is about to be updated
    BeforeUpdate,
    /// Component is updating
    Updating,
    /// Component is about to be unmounted
    BeforeUnmount,
    /// Component is being unmounted
    Unmounting,
    /// Component is unmounted and inactive
    Unmounted,
}

/// Props trait - implemented by all component props types
pub trait Props: Clone + Send + Sync + 'static {
    /// Get the type name for debugging
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<T: Clone + Send + Sync + 'static> Props for T {}

/// Component trait - implemented by all UI components
pub trait Component: Send + Sync + 'static {
    /// The props type for this component
    type Props: Props;

    /// Create a new component instance
    fn create(props: Self::Props, context: Context) -> Self
    where
        Self: Sized;

    /// Initialize the component - called immediately after creation
    fn initialize(&mut self) -> Result<(), ComponentError> {
        Ok(())
    }

    /// Mount component - called when component is first added to the tree
    fn mount(&mut self) -> Result<(), ComponentError> {
        Ok(())
    }

    /// Called before component updates with new props
    fn before_update(&mut self, _new_props: &Self::Props) -> Result<(), ComponentError> {
        Ok(())
    }

    /// Update component with new props
    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError>;

    /// Called after the component has updated
    fn after_update(&mut self) -> Result<(), ComponentError> {
        Ok(())
    }

    /// Called before component is unmounted
    fn before_unmount(&mut self) -> Result<(), ComponentError> {
        Ok(())
    }

    /// Unmount component - called when component is removed from the tree
    fn unmount(&mut self) -> Result<(), ComponentError> {
        Ok(())
    }

    /// Render component - returns child nodes
    fn render(&self) -> Result<Vec<Node>, ComponentError>;
}
