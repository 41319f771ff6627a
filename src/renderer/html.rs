//! HTML string renderer

use std::fmt::Write;

use crate::component::node::{AttrValue, NodeKind};
use crate::component::Node;
use crate::kit::utils::string::escape_html;
use crate::renderer::{RenderOptions, Renderer};

/// Elements that never have content or a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Renders nodes to HTML markup
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    fn write_node(&self, out: &mut String, node: &Node, depth: usize) -> std::fmt::Result {
        let pad = if self.options.pretty {
            " ".repeat(depth * self.options.indent)
        } else {
            String::new()
        };
        let newline = if self.options.pretty { "\n" } else { "" };

        let tag = match node.kind() {
            NodeKind::Text(text) => {
                return write!(out, "{pad}{}{newline}", escape_html(text));
            }
            NodeKind::Element(tag) => tag,
        };

        write!(out, "{pad}<{tag}")?;
        if self.options.include_ids && node.id().is_assigned() {
            write!(out, " data-node-id=\"{}\"", node.id().value())?;
        }
        for (name, value) in node.attributes() {
            match value {
                AttrValue::Text(text) => write!(out, " {name}=\"{}\"", escape_html(text))?,
                AttrValue::Flag => write!(out, " {name}")?,
            }
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&tag.as_str()) {
            out.push_str(newline);
            return Ok(());
        }

        if node.children().is_empty() {
            return write!(out, "</{tag}>{newline}");
        }

        out.push_str(newline);
        for child in node.children() {
            self.write_node(out, child, depth + 1)?;
        }
        write!(out, "{pad}</{tag}>{newline}")
    }
}

impl Renderer for HtmlRenderer {
    type Output = String;

    fn name(&self) -> &'static str {
        "html"
    }

    fn render(&self, nodes: &[Node]) -> Result<String, crate::Error> {
        let mut out = String::new();
        for node in nodes {
            self.write_node(&mut out, node, 0)?;
        }
        Ok(out)
    }
}

/// Render nodes to HTML with the given options
pub fn render_to_string(nodes: &[Node], options: &RenderOptions) -> Result<String, crate::Error> {
    HtmlRenderer::new(options.clone()).render(nodes)
}
