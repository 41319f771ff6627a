//! Test harness for components
//!
//! [`Screen`] mounts a component and exposes the queries and interactions a
//! user has: find elements by role or visible text, click them, type into them.
//! Queries read the tree of the last render, so re-query after an interaction
//! to observe its effect.

use crate::component::node::NodeKind;
use crate::component::{Component, ComponentError, LifecycleManager, Node, NodeId, NodeRef};
use crate::events::UiEvent;
use crate::renderer::{self, RenderOptions};

/// Errors returned by [`Screen`]
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("no element matches {0}")]
    NotFound(String),

    #[error("{count} elements match {query}, expected one")]
    Multiple { query: String, count: usize },

    #[error(transparent)]
    Component(#[from] ComponentError),

    #[error(transparent)]
    Render(#[from] crate::Error),
}

/// A mounted component with user-level queries
#[derive(Debug)]
pub struct Screen<C: Component> {
    manager: LifecycleManager<C>,
}

impl<C: Component> Screen<C> {
    /// Create and mount a component
    pub fn render(props: C::Props) -> Result<Self, QueryError> {
        let mut manager = LifecycleManager::new(props)?;
        manager.mount()?;
        Ok(Self { manager })
    }

    /// Re-render with new props
    pub fn rerender(&mut self, props: C::Props) -> Result<(), QueryError> {
        Ok(self.manager.update(props)?)
    }

    /// Unmount the component
    pub fn unmount(&mut self) -> Result<(), QueryError> {
        Ok(self.manager.unmount()?)
    }

    /// Host driving the component
    pub fn manager(&self) -> &LifecycleManager<C> {
        &self.manager
    }

    /// The mounted component
    pub fn component(&self) -> &C {
        self.manager.component()
    }

    /// Every mounted node, pre-order
    pub fn all_nodes(&self) -> Vec<&Node> {
        self.manager
            .tree()
            .iter()
            .flat_map(Node::descendants)
            .collect()
    }

    /// Node by id
    pub fn node(&self, id: NodeId) -> Result<&Node, QueryError> {
        self.manager
            .find(id)
            .ok_or_else(|| QueryError::NotFound(format!("id {id}")))
    }

    /// Node a forwarded handle is bound to
    pub fn resolve(&self, node_ref: &NodeRef) -> Result<&Node, QueryError> {
        self.manager
            .resolve(node_ref)
            .ok_or_else(|| QueryError::NotFound("node ref".to_string()))
    }

    fn single<'a>(query: String, mut matches: Vec<&'a Node>) -> Result<&'a Node, QueryError> {
        match matches.len() {
            0 => Err(QueryError::NotFound(query)),
            1 => Ok(matches.remove(0)),
            count => Err(QueryError::Multiple { query, count }),
        }
    }

    /// All elements with this accessibility role
    pub fn query_all_by_role(&self, role: &str) -> Vec<&Node> {
        self.all_nodes()
            .into_iter()
            .filter(|node| node.role() == Some(role))
            .collect()
    }

    /// The single element with this role
    pub fn get_by_role(&self, role: &str) -> Result<&Node, QueryError> {
        Self::single(format!("role {role:?}"), self.query_all_by_role(role))
    }

    /// The single element with this role and accessible name
    pub fn get_by_role_named(&self, role: &str, name: &str) -> Result<&Node, QueryError> {
        let matches = self
            .query_all_by_role(role)
            .into_iter()
            .filter(|node| self.accessible_name(node.id()).as_deref() == Some(name))
            .collect();
        Self::single(format!("role {role:?} named {name:?}"), matches)
    }

    /// All elements whose own text (trimmed) equals `text`
    pub fn query_all_by_text(&self, text: &str) -> Vec<&Node> {
        self.all_nodes()
            .into_iter()
            .filter(|node| matches!(node.kind(), NodeKind::Element(_)))
            .filter(|node| node.own_text().trim() == text)
            .collect()
    }

    /// The single element whose own text equals `text`
    pub fn get_by_text(&self, text: &str) -> Result<&Node, QueryError> {
        Self::single(format!("text {text:?}"), self.query_all_by_text(text))
    }

    /// Accessible name of an element.
    ///
    /// An `aria-label` attribute wins; otherwise a control nested in a
    /// `<label>` is named by the label's text. Validation messages
    /// (`role="alert"`) and hidden content describe the control rather than
    /// name it, so they are left out. Surrounding whitespace is trimmed, as
    /// testing-library's default normaliser does.
    pub fn accessible_name(&self, id: NodeId) -> Option<String> {
        let path = self.manager.tree().iter().find_map(|root| root.path_to(id))?;
        let target = path.last()?;
        if let Some(label) = target.attribute("aria-label") {
            return Some(label.to_string());
        }
        let label = path
            .iter()
            .rev()
            .find(|node| node.tag() == Some("label"))?;
        let mut name = String::new();
        collect_name_text(label, &mut name);
        Some(name.trim().to_string())
    }

    /// Click an element as a user would
    pub fn click(&mut self, id: NodeId) -> Result<bool, QueryError> {
        Ok(self.manager.dispatch(UiEvent::click(id))?)
    }

    /// Type text into an element as a user would
    pub fn type_text(&mut self, id: NodeId, value: &str) -> Result<bool, QueryError> {
        Ok(self.manager.dispatch(UiEvent::input(id, value))?)
    }

    /// Current tree as HTML
    pub fn html(&self) -> Result<String, QueryError> {
        Ok(renderer::html::render_to_string(
            self.manager.tree(),
            &RenderOptions::default(),
        )?)
    }
}

fn collect_name_text(node: &Node, out: &mut String) {
    match node.kind() {
        NodeKind::Text(text) => out.push_str(text),
        NodeKind::Element(_) => {
            if node.attribute("role") == Some("alert")
                || node.attribute("aria-hidden") == Some("true")
            {
                return;
            }
            for child in node.children() {
                collect_name_text(child, out);
            }
        }
    }
}
