//! Virtual element tree produced by component rendering
//!
//! Components render into [`Node`]s instead of a platform DOM. A node is either
//! an element (tag, attributes, children, event listeners) or a text run. The
//! host assigns ids once a tree is mounted: ids follow pre-order position, so an
//! element keeps its id across re-renders as long as the structure before it
//! does not change.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::component::Callback;
use crate::events::{EventKind, UiEvent};

/// Identifier of a mounted node
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct NodeId(u64);

impl NodeId {
    /// Id carried by nodes that have not been mounted yet
    pub const UNASSIGNED: NodeId = NodeId(0);

    /// Wrap a raw id
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw id value
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Whether the host has assigned this id
    pub fn is_assigned(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Attribute value on an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// `name="value"`
    Text(String),
    /// Boolean attribute, present means true (`checked`, `disabled`, ...)
    Flag,
}

/// What a node is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Element with a tag name
    Element(String),
    /// Text run
    Text(String),
}

/// Handle to a rendered element, forwarded by components to their native control.
///
/// The component attaches the handle to an element while rendering; the host
/// binds it to that element's id whenever the tree is (re)mounted.
#[derive(Clone, Default)]
pub struct NodeRef {
    target: Arc<Mutex<Option<NodeId>>>,
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(&self.get()).finish()
    }
}

impl NodeRef {
    /// Create an unbound handle
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the element this handle is bound to
    pub fn get(&self) -> Option<NodeId> {
        *self
            .target
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub(crate) fn bind(&self, id: NodeId) {
        *self
            .target
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(id);
    }

    pub(crate) fn clear(&self) {
        *self
            .target
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }
}

/// A node in the UI tree
#[derive(Clone)]
pub struct Node {
    /// Host-assigned id
    id: NodeId,

    /// Element or text
    kind: NodeKind,

    /// Element attributes, kept sorted for deterministic output
    attributes: BTreeMap<String, AttrValue>,

    /// Child nodes
    children: Vec<Node>,

    /// Event listeners by event kind
    listeners: HashMap<EventKind, Callback<UiEvent>>,

    /// Handle to bind to this node on mount
    node_ref: Option<NodeRef>,
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut listeners: Vec<_> = self.listeners.keys().collect();
        listeners.sort();
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("attributes", &self.attributes)
            .field("listeners", &listeners)
            .field("children", &self.children)
            .finish()
    }
}

impl Node {
    fn with_kind(kind: NodeKind) -> Self {
        Self {
            id: NodeId::UNASSIGNED,
            kind,
            attributes: BTreeMap::new(),
            children: Vec::new(),
            listeners: HashMap::new(),
            node_ref: None,
        }
    }

    /// Create an element node
    pub fn element(tag: impl Into<String>) -> Self {
        Self::with_kind(NodeKind::Element(tag.into()))
    }

    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::with_kind(NodeKind::Text(content.into()))
    }

    /// Set a text attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .insert(name.into(), AttrValue::Text(value.into()));
        self
    }

    /// Set a text attribute when a value is present
    pub fn attr_opt<V: Into<String>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Set or clear a boolean attribute
    pub fn flag(mut self, name: impl Into<String>, on: bool) -> Self {
        let name = name.into();
        if on {
            self.attributes.insert(name, AttrValue::Flag);
        } else {
            self.attributes.remove(&name);
        }
        self
    }

    /// Append a child
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Register a listener for an event kind, replacing any previous one
    pub fn on(mut self, kind: EventKind, listener: Callback<UiEvent>) -> Self {
        self.listeners.insert(kind, listener);
        self
    }

    /// Attach a handle to be bound to this node on mount
    pub fn with_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    /// Get the node's ID
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// What kind of node this is
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Tag name for elements
    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element(tag) => Some(tag),
            NodeKind::Text(_) => None,
        }
    }

    /// Content of a text node
    pub fn text_value(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(text) => Some(text),
            NodeKind::Element(_) => None,
        }
    }

    /// Attribute value; boolean attributes read as the empty string
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|value| match value {
            AttrValue::Text(text) => text.as_str(),
            AttrValue::Flag => "",
        })
    }

    /// Whether the attribute is present
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Get attributes
    pub fn attributes(&self) -> &BTreeMap<String, AttrValue> {
        &self.attributes
    }

    /// Get a reference to the node's children
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Listener registered for an event kind
    pub fn listener(&self, kind: EventKind) -> Option<&Callback<UiEvent>> {
        self.listeners.get(&kind)
    }

    /// Event kinds this node listens to
    pub fn listens_to(&self, kind: EventKind) -> bool {
        self.listeners.contains_key(&kind)
    }

    /// Attached node handle, if any
    pub fn node_ref(&self) -> Option<&NodeRef> {
        self.node_ref.as_ref()
    }

    /// Class list as individual class names
    pub fn classes(&self) -> Vec<&str> {
        self.attribute("class")
            .map(|class| class.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Whether the element is disabled
    pub fn is_disabled(&self) -> bool {
        self.has_attribute("disabled")
    }

    /// Whether the element is checked
    pub fn is_checked(&self) -> bool {
        self.has_attribute("checked")
    }

    /// Concatenated text of the whole subtree
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.kind {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Element(_) => {
                for child in &self.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Text of the direct text children only
    pub fn own_text(&self) -> String {
        self.children
            .iter()
            .filter_map(Node::text_value)
            .collect::<String>()
    }

    /// Accessibility role: an explicit `role` attribute, otherwise the implicit
    /// role of the element
    pub fn role(&self) -> Option<&str> {
        if let Some(role) = self.attribute("role") {
            return Some(role);
        }
        match self.tag()? {
            "input" => match self.attribute("type").unwrap_or("text") {
                "checkbox" => Some("checkbox"),
                "radio" => Some("radio"),
                "number" => Some("spinbutton"),
                "text" | "email" | "search" | "tel" | "url" => Some("textbox"),
                _ => None,
            },
            "button" => Some("button"),
            "textarea" => Some("textbox"),
            _ => None,
        }
    }

    /// This node and all its descendants, pre-order
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        self.collect_descendants(&mut out);
        out
    }

    fn collect_descendants<'a>(&'a self, out: &mut Vec<&'a Node>) {
        out.push(self);
        for child in &self.children {
            child.collect_descendants(out);
        }
    }

    /// Find a node by id in this subtree
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Chain of nodes from this node down to `id`, both ends included
    pub fn path_to(&self, id: NodeId) -> Option<Vec<&Node>> {
        if self.id == id {
            return Some(vec![self]);
        }
        for child in &self.children {
            if let Some(mut path) = child.path_to(id) {
                path.insert(0, self);
                return Some(path);
            }
        }
        None
    }
}

/// Assign pre-order ids starting at 1 and bind attached node handles
pub(crate) fn assign_ids(nodes: &mut [Node]) {
    let mut next = 1;
    for node in nodes {
        assign_subtree(node, &mut next);
    }
}

fn assign_subtree(node: &mut Node, next: &mut u64) {
    node.id = NodeId(*next);
    *next += 1;
    if let Some(node_ref) = &node.node_ref {
        node_ref.bind(node.id);
    }
    for child in &mut node.children {
        assign_subtree(child, next);
    }
}

/// Unbind every handle attached in the tree
pub(crate) fn release_refs(nodes: &[Node]) {
    for node in nodes {
        if let Some(node_ref) = &node.node_ref {
            node_ref.clear();
        }
        release_refs(&node.children);
    }
}

/// Find a node by id across a forest
pub fn find_in(nodes: &[Node], id: NodeId) -> Option<&Node> {
    nodes.iter().find_map(|node| node.find(id))
}
