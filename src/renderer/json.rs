//! JSON snapshot renderer

use serde_json::{json, Map, Value};

use crate::component::node::{AttrValue, NodeKind};
use crate::component::Node;
use crate::events::EventKind;
use crate::renderer::{RenderOptions, Renderer};

/// Renders nodes to a JSON value: elements become
/// `{"tag", "attributes", "listeners", "children"}`, text nodes become strings
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    options: RenderOptions,
}

impl JsonRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    fn node_value(&self, node: &Node) -> Value {
        let tag = match node.kind() {
            NodeKind::Text(text) => return Value::String(text.clone()),
            NodeKind::Element(tag) => tag,
        };

        let attributes: Map<String, Value> = node
            .attributes()
            .iter()
            .map(|(name, value)| {
                let value = match value {
                    AttrValue::Text(text) => Value::String(text.clone()),
                    AttrValue::Flag => Value::Bool(true),
                };
                (name.clone(), value)
            })
            .collect();

        let listeners: Vec<EventKind> = [EventKind::Click, EventKind::Input]
            .into_iter()
            .filter(|kind| node.listens_to(*kind))
            .collect();

        let children: Vec<Value> = node
            .children()
            .iter()
            .map(|child| self.node_value(child))
            .collect();

        let mut value = json!({
            "tag": tag,
            "attributes": attributes,
            "listeners": listeners,
            "children": children
        });
        if self.options.include_ids && node.id().is_assigned() {
            value["id"] = json!(node.id());
        }
        value
    }
}

impl Renderer for JsonRenderer {
    type Output = Value;

    fn name(&self) -> &'static str {
        "json"
    }

    fn render(&self, nodes: &[Node]) -> Result<Value, crate::Error> {
        Ok(Value::Array(
            nodes.iter().map(|node| self.node_value(node)).collect(),
        ))
    }
}

/// Snapshot a tree as a JSON value
pub fn to_snapshot(nodes: &[Node]) -> Result<Value, crate::Error> {
    JsonRenderer::default().render(nodes)
}
