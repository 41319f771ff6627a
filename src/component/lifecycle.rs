//! Component lifecycle management for CoreUI
//!
//! [`LifecycleManager`] is the host for a single component: it drives the
//! lifecycle hooks, keeps the last rendered tree, and routes user interactions
//! to the listeners attached to that tree.

use log::{debug, trace, warn};

use crate::component::node::{self, Node, NodeId, NodeRef};
use crate::component::{Component, ComponentError, Context, LifecyclePhase};
use crate::events::{EventKind, LifecycleEvent, UiEvent};

/// Manages the lifecycle of a component
pub struct LifecycleManager<C: Component> {
    /// Current phase of the component
    phase: LifecyclePhase,

    /// Component instance being managed
    component: C,

    /// Context shared with the component
    context: Context,

    /// Tree produced by the last render
    tree: Vec<Node>,
}

impl<C: Component> std::fmt::Debug for LifecycleManager<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleManager")
            .field("component", &std::any::type_name::<C>())
            .field("phase", &self.phase)
            .field("tree", &self.tree)
            .finish()
    }
}

impl<C: Component> LifecycleManager<C> {
    /// Create and initialize a component
    pub fn new(props: C::Props) -> Result<Self, ComponentError> {
        Self::with_context(props, Context::new())
    }

    /// Create and initialize a component with an existing context
    pub fn with_context(props: C::Props, context: Context) -> Result<Self, ComponentError> {
        let mut component = C::create(props, context.clone());
        component.initialize()?;
        Ok(Self {
            phase: LifecyclePhase::Created,
            component,
            context,
            tree: Vec::new(),
        })
    }

    /// Get the current lifecycle phase
    pub fn current_phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// Get a reference to the component
    pub fn component(&self) -> &C {
        &self.component
    }

    /// Get a reference to the component's context
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Tree produced by the last render
    pub fn tree(&self) -> &[Node] {
        &self.tree
    }

    /// Find a node of the mounted tree by id
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        node::find_in(&self.tree, id)
    }

    /// Resolve a forwarded node handle against the mounted tree
    pub fn resolve(&self, node_ref: &NodeRef) -> Option<&Node> {
        node_ref.get().and_then(|id| self.find(id))
    }

    fn set_phase(&mut self, phase: LifecyclePhase) {
        self.phase = phase;
        self.context.set_lifecycle_phase(phase);
    }

    fn expect_phase(&self, phase: LifecyclePhase, operation: &str) -> Result<(), ComponentError> {
        if self.phase != phase {
            return Err(ComponentError::InvalidLifecycleTransition(
                self.phase,
                operation.to_string(),
            ));
        }
        Ok(())
    }

    fn rerender(&mut self) -> Result<(), ComponentError> {
        let mut tree = self.component.render()?;
        node::assign_ids(&mut tree);
        self.tree = tree;
        // Writes made while rendering do not schedule another pass
        self.context.take_dirty();
        Ok(())
    }

    /// Mount the component to the tree
    pub fn mount(&mut self) -> Result<(), ComponentError> {
        self.expect_phase(LifecyclePhase::Created, "mount")?;

        self.set_phase(LifecyclePhase::Mounting);
        let result = self.component.mount().and_then(|()| self.rerender());
        if let Err(err) = result {
            // Reset phase on error
            self.set_phase(LifecyclePhase::Created);
            return Err(err);
        }

        self.set_phase(LifecyclePhase::Mounted);
        debug!(
            "mounted {} ({} root nodes)",
            std::any::type_name::<C>(),
            self.tree.len()
        );
        self.context.events().emit(&LifecycleEvent::Mount);
        Ok(())
    }

    /// Update the component with new props and re-render
    pub fn update(&mut self, props: C::Props) -> Result<(), ComponentError> {
        self.expect_phase(LifecyclePhase::Mounted, "update")?;

        self.set_phase(LifecyclePhase::BeforeUpdate);
        let result = self.component.before_update(&props).and_then(|()| {
            self.set_phase(LifecyclePhase::Updating);
            self.component.update(props)?;
            self.component.after_update()?;
            self.rerender()
        });

        // The previous tree stays valid when an update fails
        self.set_phase(LifecyclePhase::Mounted);
        result?;

        debug!("updated {}", std::any::type_name::<C>());
        self.context.events().emit(&LifecycleEvent::Update);
        Ok(())
    }

    /// Deliver a user interaction to the listener on its target node.
    ///
    /// Returns whether a listener ran. Disabled elements swallow events, and
    /// read-only ones swallow text input, the way native form controls do.
    /// A click that lands inside a `<label>` on a node without a click
    /// listener activates the label's control instead.
    /// When the listener writes component state the tree is re-rendered before
    /// this returns.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<bool, ComponentError> {
        self.expect_phase(LifecyclePhase::Mounted, "dispatch")?;

        let target = event.target();
        let node = self
            .find(target)
            .ok_or(ComponentError::NodeNotFound(target))?;

        if node.is_disabled() {
            warn!("{:?} on disabled element {target} ignored", event.kind());
            return Ok(false);
        }
        if event.kind() == EventKind::Input && node.has_attribute("readonly") {
            warn!("text input on read-only element {target} ignored");
            return Ok(false);
        }

        let (event, listener) = match node.listener(event.kind()) {
            Some(listener) => (event, listener.clone()),
            None => {
                let Some(control) = self.labeled_control(&event) else {
                    trace!("no {:?} listener on {target}", event.kind());
                    return Ok(false);
                };
                if control.is_disabled() {
                    warn!("label click on {target} for disabled {} ignored", control.id());
                    return Ok(false);
                }
                let Some(listener) = control.listener(EventKind::Click) else {
                    trace!("label control {} has no click listener", control.id());
                    return Ok(false);
                };
                trace!("label click on {target} activates {}", control.id());
                (UiEvent::click(control.id()), listener.clone())
            }
        };

        trace!("dispatching {:?} to {}", event.kind(), event.target());
        listener.call(event);

        if self.context.take_dirty() {
            self.rerender()?;
            self.context.events().emit(&LifecycleEvent::StateChange);
        }
        Ok(true)
    }

    // Control activated by a click on its label or the label's content
    fn labeled_control(&self, event: &UiEvent) -> Option<&Node> {
        if event.kind() != EventKind::Click {
            return None;
        }
        let path = self
            .tree
            .iter()
            .find_map(|root| root.path_to(event.target()))?;
        let label = path
            .iter()
            .rev()
            .copied()
            .find(|node| node.tag() == Some("label"))?;
        label
            .descendants()
            .into_iter()
            .find(|node| matches!(node.tag(), Some("input" | "button" | "textarea" | "select")))
    }

    /// Unmount the component from the tree
    pub fn unmount(&mut self) -> Result<(), ComponentError> {
        self.expect_phase(LifecyclePhase::Mounted, "unmount")?;

        self.set_phase(LifecyclePhase::BeforeUnmount);
        self.component.before_unmount()?;

        self.set_phase(LifecyclePhase::Unmounting);
        self.component.unmount()?;

        node::release_refs(&self.tree);
        self.tree.clear();
        self.set_phase(LifecyclePhase::Unmounted);
        debug!("unmounted {}", std::any::type_name::<C>());
        self.context.events().emit(&LifecycleEvent::Unmount);
        Ok(())
    }
}
