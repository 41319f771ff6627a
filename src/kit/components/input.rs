// Input component for CoreUI kit

use serde::{Deserialize, Serialize};

use crate::component::{callback, Callback, Component, ComponentError, Context, Node, NodeRef};
use crate::events::{EventKind, UiEvent};
use crate::kit::utils::class_names::ClassList;

/// Input value type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    Text,
    Number,
    Email,
    Password,
    Checkbox,
}

impl InputType {
    /// Value of the `type` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Email => "email",
            Self::Password => "password",
            Self::Checkbox => "checkbox",
        }
    }
}

/// Styled native input, fully controlled by the caller
///
/// Holds no copy of the field value: what is rendered is whatever the last
/// props said. Text typed by the user only reaches the caller through
/// `on_change`.
#[derive(Debug)]
pub struct Input {
    props: InputProps,
}

/// Input props
#[derive(Debug, Clone, Default)]
pub struct InputProps {
    /// Input value type
    pub input_type: InputType,
    /// Identifier for form submit
    pub name: Option<String>,
    /// Placeholder to show when empty
    pub placeholder: Option<String>,
    /// Notified on every change
    pub on_change: Option<Callback<()>>,
    /// Disabled mode
    pub disabled: bool,
    /// Read only mode
    pub read_only: bool,
    /// Stretch to max width
    pub fill_width: bool,
    /// Display error state
    pub error: bool,
    /// Extra classes
    pub class_name: Option<String>,
    /// Current value of input
    pub value: Option<String>,
    /// Handle bound to the native input element
    pub node_ref: Option<NodeRef>,
}

impl InputProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(()) + Send + Sync + 'static,
    {
        self.on_change = Some(callback(on_change));
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn fill_width(mut self, fill_width: bool) -> Self {
        self.fill_width = fill_width;
        self
    }

    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn node_ref(mut self, node_ref: &NodeRef) -> Self {
        self.node_ref = Some(node_ref.clone());
        self
    }

    /// `class` attribute: `input [class_name] [fillWidth] [error]`
    pub fn class_list(&self) -> ClassList {
        ClassList::new()
            .add("input")
            .add_opt(self.class_name.as_deref())
            .toggle("fillWidth", self.fill_width)
            .toggle("error", self.error)
    }
}

impl Input {
    /// Current props
    pub fn props(&self) -> &InputProps {
        &self.props
    }

    fn change_listener(&self) -> Option<Callback<UiEvent>> {
        let on_change = self.props.on_change.clone()?;
        Some(callback(move |_event: UiEvent| on_change.call(())))
    }
}

impl Component for Input {
    type Props = InputProps;

    fn create(props: Self::Props, _context: Context) -> Self {
        Self { props }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.props = props;
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        let props = &self.props;

        // Passthrough: type, name, placeholder, disabled, value.
        // fill_width and error only feed the class list; readonly is re-applied.
        let mut input = Node::element("input")
            .attr("class", props.class_list().build())
            .attr("type", props.input_type.as_str())
            .attr_opt("name", props.name.clone())
            .attr_opt("placeholder", props.placeholder.clone())
            .attr_opt("value", props.value.clone())
            .flag("disabled", props.disabled)
            .flag("readonly", props.read_only);

        if let Some(listener) = self.change_listener() {
            let kind = match props.input_type {
                InputType::Checkbox => EventKind::Click,
                _ => EventKind::Input,
            };
            input = input.on(kind, listener);
        }
        if let Some(node_ref) = &props.node_ref {
            input = input.with_ref(node_ref.clone());
        }

        Ok(vec![input])
    }
}
