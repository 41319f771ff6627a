// Label layout wrapper for CoreUI kit

use serde::{Deserialize, Serialize};

use crate::component::{Component, ComponentError, Context, Node};
use crate::kit::utils::class_names::ClassList;

/// Where the title sits relative to the wrapped control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    /// Title before the control, same line
    Left,
    /// Title after the control, same line
    Right,
    /// Title above the control
    #[default]
    Top,
}

impl LabelPosition {
    /// Class applied to the wrapper for this position
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
        }
    }
}

/// Label wrapper component
///
/// Wraps form controls in a `<label>` element so the title becomes the
/// accessible name of the control inside it.
#[derive(Debug)]
pub struct Label {
    props: LabelProps,
}

/// Label props
#[derive(Debug, Clone, Default)]
pub struct LabelProps {
    /// Title text
    pub title: String,
    /// Tab index of the wrapper
    pub tab_index: Option<i32>,
    /// Render the wrapper in disabled style
    pub disabled: bool,
    /// Extra classes for the wrapper
    pub class_name: Option<String>,
    /// Title placement
    pub position: LabelPosition,
    /// Wrapped content
    pub children: Vec<Node>,
}

impl LabelProps {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn tab_index(mut self, tab_index: Option<i32>) -> Self {
        self.tab_index = tab_index;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn class_name(mut self, class_name: Option<String>) -> Self {
        self.class_name = class_name;
        self
    }

    pub fn position(mut self, position: LabelPosition) -> Self {
        self.position = position;
        self
    }

    pub fn children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }
}

/// Build the label element for `props`
pub fn label_view(props: &LabelProps) -> Node {
    let class = ClassList::new()
        .add("label-wrapper")
        .add(props.position.class_name())
        .toggle("disabled", props.disabled)
        .add_opt(props.class_name.as_deref());

    let title = Node::element("span")
        .attr("class", "title")
        .child(Node::text(props.title.clone()));

    let children = props.children.iter().cloned();
    let content: Vec<Node> = match props.position {
        LabelPosition::Right => children.chain(std::iter::once(title)).collect(),
        LabelPosition::Left | LabelPosition::Top => {
            std::iter::once(title).chain(children).collect()
        }
    };

    Node::element("label")
        .attr("class", class.build())
        .attr_opt("tabindex", props.tab_index.map(|index| index.to_string()))
        .with_children(content)
}

impl Component for Label {
    type Props = LabelProps;

    fn create(props: Self::Props, _context: Context) -> Self {
        Self { props }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.props = props;
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        Ok(vec![label_view(&self.props)])
    }
}
