//! Output backends for rendered trees
//!
//! - [`html`]: markup string, for server-side rendering and snapshots
//! - [`json`]: structured snapshot through serde_json

pub mod html;
pub mod json;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;

use serde::{Deserialize, Serialize};

use crate::component::Node;

/// Types of renderers available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererType {
    /// HTML markup
    #[default]
    Html,
    /// JSON snapshot
    Json,
}

/// Options shared by all renderers
///
/// Deserializable so hosts can keep it in their own configuration files;
/// missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Which backend [`render`] uses
    pub renderer: RendererType,
    /// Put each element on its own line
    pub pretty: bool,
    /// Spaces per nesting level when `pretty`
    pub indent: usize,
    /// Emit host-assigned node ids (`data-node-id` in HTML, `id` in JSON)
    pub include_ids: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            renderer: RendererType::Html,
            pretty: false,
            indent: 2,
            include_ids: false,
        }
    }
}

impl RenderOptions {
    /// Parse options from a JSON document
    pub fn from_json(source: &str) -> Result<Self, crate::Error> {
        Ok(serde_json::from_str(source)?)
    }
}

/// A backend turning a rendered tree into some output
pub trait Renderer {
    /// What the backend produces
    type Output;

    /// Name of the renderer
    fn name(&self) -> &'static str;

    /// Render a forest of nodes
    fn render(&self, nodes: &[Node]) -> Result<Self::Output, crate::Error>;
}

/// Render to a string with the backend selected in `options`
pub fn render(nodes: &[Node], options: &RenderOptions) -> Result<String, crate::Error> {
    log::trace!("rendering {} root nodes as {:?}", nodes.len(), options.renderer);
    match options.renderer {
        RendererType::Html => HtmlRenderer::new(options.clone()).render(nodes),
        RendererType::Json => {
            let snapshot = JsonRenderer::new(options.clone()).render(nodes)?;
            let text = if options.pretty {
                serde_json::to_string_pretty(&snapshot)?
            } else {
                serde_json::to_string(&snapshot)?
            };
            Ok(text)
        }
    }
}
