// Checkbox component for CoreUI kit

use log::{debug, warn};

use crate::component::props::{
    collect_errors, require_non_empty, PropValidationError, PropValidator,
};
use crate::component::{callback, Callback, Component, ComponentError, Context, Node, NodeRef};
use crate::events::{EventKind, UiEvent};
use crate::kit::components::icons::alert_circle_view;
use crate::kit::components::label::{label_view, LabelPosition, LabelProps};
use crate::kit::utils::class_names::ClassList;
use crate::state::{Effect, State};

/// Labeled boolean toggle
///
/// The checked flag lives in the component. It is re-synced from `value`
/// (or `default_value` when `value` is absent) whenever either prop changes, and
/// toggled locally on every click, also when `value` is supplied. A caller that
/// passes `value` but ignores `on_change` sees the toggle until the next update
/// that changes `value` or `default_value`.
///
/// ```
/// use coreui::kit::components::checkbox::{Checkbox, CheckboxProps};
/// use coreui::testing::Screen;
///
/// let mut screen = Screen::<Checkbox>::render(CheckboxProps::new("Accept terms")).unwrap();
/// let id = screen.get_by_role("checkbox").unwrap().id();
/// screen.click(id).unwrap();
/// assert!(screen.get_by_role("checkbox").unwrap().is_checked());
/// ```
#[derive(Debug)]
pub struct Checkbox {
    /// Current props
    props: CheckboxProps,
    /// Displayed checked state
    checked: State<bool>,
    /// Tracks `(value, default_value)` for reconciliation
    sync: Effect<(Option<bool>, Option<bool>)>,
}

/// Checkbox props
#[derive(Debug, Clone, Default)]
pub struct CheckboxProps {
    /// Identifier for form submit
    pub name: Option<String>,
    /// Label displayed to the right of the checkbox
    pub label: String,
    /// Initial checked state, does not make the checkbox controlled
    pub default_value: Option<bool>,
    /// Checked state supplied by the caller
    pub value: Option<bool>,
    /// Read only mode
    pub disabled: bool,
    /// Error message displayed underneath the checkbox
    pub error: Option<String>,
    /// Tab index of the label wrapper
    pub tab_index: Option<i32>,
    /// Extra classes for the label wrapper
    pub class_name: Option<String>,
    /// Called with the new state after a user toggle
    pub on_change: Option<Callback<bool>>,
    /// Handle bound to the native input element
    pub node_ref: Option<NodeRef>,
}

impl CheckboxProps {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn default_value(mut self, default_value: bool) -> Self {
        self.default_value = Some(default_value);
        self
    }

    pub fn value(mut self, value: bool) -> Self {
        self.value = Some(value);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.on_change = Some(callback(on_change));
        self
    }

    pub fn node_ref(mut self, node_ref: &NodeRef) -> Self {
        self.node_ref = Some(node_ref.clone());
        self
    }

    /// Checked state these props resolve to when reconciled
    pub fn resolved_checked(&self) -> bool {
        self.value.unwrap_or(self.default_value.unwrap_or(false))
    }
}

/// Reports a blank label or a blank error message
#[derive(Debug, Default, Clone, Copy)]
pub struct CheckboxValidator;

impl PropValidator<CheckboxProps> for CheckboxValidator {
    fn validate(&self, props: &CheckboxProps) -> Result<(), PropValidationError> {
        let mut errors = Vec::new();
        if let Err(err) = require_non_empty("label", &props.label) {
            errors.push(err);
        }
        if matches!(props.error.as_deref(), Some(message) if message.trim().is_empty()) {
            errors.push(PropValidationError::InvalidValue {
                name: "error".to_string(),
                reason: "message is blank".to_string(),
            });
        }
        collect_errors(errors)
    }
}

// Shared by the click listener and Checkbox::toggle
fn toggle_checked(
    checked: &State<bool>,
    disabled: bool,
    on_change: Option<&Callback<bool>>,
) -> Option<bool> {
    if disabled {
        return None;
    }
    let new_value = checked.update(|current| !current);
    if let Some(on_change) = on_change {
        on_change.call(new_value);
    }
    Some(new_value)
}

impl Checkbox {
    /// Displayed checked state
    pub fn is_checked(&self) -> bool {
        self.checked.get()
    }

    /// Current props
    pub fn props(&self) -> &CheckboxProps {
        &self.props
    }

    /// Toggle as a user interaction would.
    ///
    /// Returns the new state, or `None` when disabled.
    pub fn toggle(&self) -> Option<bool> {
        toggle_checked(
            &self.checked,
            self.props.disabled,
            self.props.on_change.as_ref(),
        )
    }

    fn reconcile(&mut self) {
        let checked = &self.checked;
        let next = self.props.resolved_checked();
        let deps = (self.props.value, self.props.default_value);
        if self.sync.run(deps, |_| checked.set(next)) {
            debug!("checkbox '{}' synced to {next}", self.props.label);
        }
    }

    fn click_listener(&self) -> Callback<UiEvent> {
        let checked = self.checked.clone();
        let disabled = self.props.disabled;
        let on_change = self.props.on_change.clone();
        callback(move |_event: UiEvent| {
            toggle_checked(&checked, disabled, on_change.as_ref());
        })
    }

    fn error_view(message: &str) -> Node {
        Node::element("div")
            .attr("class", "errorLabel")
            .attr("role", "alert")
            .child(Node::text(message))
            .child(alert_circle_view())
    }
}

impl Component for Checkbox {
    type Props = CheckboxProps;

    fn create(props: Self::Props, context: Context) -> Self {
        if let Err(err) = CheckboxValidator.validate(&props) {
            warn!("checkbox props: {err}");
        }
        let checked = context.state(props.resolved_checked());
        let mut checkbox = Self {
            props,
            checked,
            sync: Effect::new(),
        };
        checkbox.reconcile();
        checkbox
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        if let Err(err) = CheckboxValidator.validate(&props) {
            warn!("checkbox props: {err}");
        }
        self.props = props;
        self.reconcile();
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        let mut input = Node::element("input")
            .attr("type", "checkbox")
            .attr_opt("name", self.props.name.clone())
            .flag("checked", self.checked.get())
            .flag("disabled", self.props.disabled)
            .on(EventKind::Click, self.click_listener());
        if let Some(node_ref) = &self.props.node_ref {
            input = input.with_ref(node_ref.clone());
        }

        let mut children = vec![input];
        if let Some(message) = &self.props.error {
            children.push(Self::error_view(message));
        }

        let class = ClassList::new()
            .add("label")
            .add_opt(self.props.class_name.as_deref());
        let label = LabelProps::new(self.props.label.clone())
            .tab_index(self.props.tab_index)
            .disabled(self.props.disabled)
            .class_name(Some(class.build()))
            .position(LabelPosition::Right)
            .children(children);

        Ok(vec![label_view(&label)])
    }
}
