// Checkbox behaviour as seen by a user

use std::sync::{Arc, Mutex};

use coreui::component::NodeRef;
use coreui::kit::components::checkbox::{Checkbox, CheckboxProps};
use coreui::testing::Screen;

const LABEL: &str = "Mock Checkbox";

// Records every on_change argument
fn recorder() -> (Arc<Mutex<Vec<bool>>>, impl Fn(bool) + Send + Sync + 'static) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = calls.clone();
    (calls, move |checked| sink.lock().unwrap().push(checked))
}

fn click_checkbox(screen: &mut Screen<Checkbox>) -> anyhow::Result<()> {
    let id = screen.get_by_role("checkbox")?.id();
    screen.click(id)?;
    Ok(())
}

#[test]
fn renders_in_the_document() -> anyhow::Result<()> {
    coreui::init()?;
    let screen = Screen::<Checkbox>::render(CheckboxProps::new(LABEL))?;
    let element = screen.get_by_role("checkbox")?;
    assert_eq!(element.tag(), Some("input"));
    assert_eq!(element.attribute("type"), Some("checkbox"));
    Ok(())
}

#[test]
fn displays_label() -> anyhow::Result<()> {
    let (_, on_change) = recorder();
    let screen = Screen::<Checkbox>::render(CheckboxProps::new(LABEL).on_change(on_change))?;

    assert_eq!(screen.get_by_text(LABEL)?.text_content(), LABEL);
    let checkbox = screen.get_by_role_named("checkbox", LABEL)?;
    assert_eq!(screen.accessible_name(checkbox.id()).as_deref(), Some(LABEL));
    Ok(())
}

#[test]
fn handles_on_change() -> anyhow::Result<()> {
    let (calls, on_change) = recorder();
    let mut screen = Screen::<Checkbox>::render(CheckboxProps::new(LABEL).on_change(on_change))?;
    assert!(calls.lock().unwrap().is_empty());

    click_checkbox(&mut screen)?;

    assert_eq!(*calls.lock().unwrap(), vec![true]);
    Ok(())
}

#[test]
fn handles_toggling_checked_state() -> anyhow::Result<()> {
    let (calls, on_change) = recorder();
    let mut screen = Screen::<Checkbox>::render(CheckboxProps::new(LABEL).on_change(on_change))?;

    click_checkbox(&mut screen)?;
    assert_eq!(*calls.lock().unwrap(), vec![true]);
    assert!(screen.get_by_role("checkbox")?.is_checked());

    calls.lock().unwrap().clear();

    click_checkbox(&mut screen)?;
    assert_eq!(*calls.lock().unwrap(), vec![false]);
    assert!(!screen.get_by_role("checkbox")?.is_checked());
    Ok(())
}

#[test]
fn allows_to_pass_the_value_as_a_prop() -> anyhow::Result<()> {
    let screen = Screen::<Checkbox>::render(CheckboxProps::new(LABEL).value(true))?;
    assert!(screen.get_by_role("checkbox")?.is_checked());

    let screen =
        Screen::<Checkbox>::render(CheckboxProps::new(LABEL).value(true).default_value(false))?;
    assert!(screen.get_by_role("checkbox")?.is_checked());
    Ok(())
}

#[test]
fn handles_default_checked_state() -> anyhow::Result<()> {
    let (calls, on_change) = recorder();
    let mut screen = Screen::<Checkbox>::render(
        CheckboxProps::new(LABEL)
            .default_value(true)
            .on_change(on_change),
    )?;
    assert!(screen.get_by_role("checkbox")?.is_checked());
    assert!(calls.lock().unwrap().is_empty());

    click_checkbox(&mut screen)?;

    assert_eq!(*calls.lock().unwrap(), vec![false]);
    Ok(())
}

#[test]
fn does_not_call_on_change_in_disabled_mode() -> anyhow::Result<()> {
    let (calls, on_change) = recorder();
    let mut screen = Screen::<Checkbox>::render(
        CheckboxProps::new(LABEL)
            .disabled(true)
            .on_change(on_change),
    )?;

    let id = screen.get_by_role("checkbox")?.id();
    assert!(screen.get_by_role("checkbox")?.is_disabled());
    assert!(!screen.click(id)?);

    assert!(calls.lock().unwrap().is_empty());
    assert!(!screen.get_by_role("checkbox")?.is_checked());
    Ok(())
}

#[test]
fn clicking_the_label_text_toggles_the_checkbox() -> anyhow::Result<()> {
    let (calls, on_change) = recorder();
    let mut screen = Screen::<Checkbox>::render(CheckboxProps::new(LABEL).on_change(on_change))?;

    let title = screen.get_by_text(LABEL)?.id();
    assert!(screen.click(title)?);
    assert!(screen.get_by_role("checkbox")?.is_checked());

    let label = screen.manager().tree()[0].id();
    assert_eq!(screen.node(label)?.tag(), Some("label"));
    assert!(screen.click(label)?);

    assert_eq!(*calls.lock().unwrap(), vec![true, false]);
    assert!(!screen.get_by_role("checkbox")?.is_checked());
    Ok(())
}

#[test]
fn clicking_the_label_of_a_disabled_checkbox_does_nothing() -> anyhow::Result<()> {
    let (calls, on_change) = recorder();
    let mut screen = Screen::<Checkbox>::render(
        CheckboxProps::new(LABEL)
            .disabled(true)
            .on_change(on_change),
    )?;

    let title = screen.get_by_text(LABEL)?.id();
    assert!(!screen.click(title)?);

    assert!(calls.lock().unwrap().is_empty());
    assert!(!screen.get_by_role("checkbox")?.is_checked());
    Ok(())
}

#[test]
fn accessible_name_trims_surrounding_whitespace() -> anyhow::Result<()> {
    let screen = Screen::<Checkbox>::render(CheckboxProps::new(" Pad "))?;
    let checkbox = screen.get_by_role("checkbox")?;

    assert_eq!(screen.accessible_name(checkbox.id()).as_deref(), Some("Pad"));
    assert_eq!(screen.get_by_text("Pad")?.text_content(), " Pad ");
    Ok(())
}

#[test]
fn soft_controlled_value_reverts_when_the_caller_changes_it() -> anyhow::Result<()> {
    let mut screen = Screen::<Checkbox>::render(CheckboxProps::new(LABEL).value(false))?;

    // Local toggle even though the caller supplies the value
    click_checkbox(&mut screen)?;
    assert!(screen.get_by_role("checkbox")?.is_checked());

    // Re-render with identical props: nothing to reconcile
    screen.rerender(CheckboxProps::new(LABEL).value(false))?;
    assert!(screen.get_by_role("checkbox")?.is_checked());

    // A changed value wins over the local toggle
    screen.rerender(CheckboxProps::new(LABEL).value(true))?;
    assert!(screen.get_by_role("checkbox")?.is_checked());
    screen.rerender(CheckboxProps::new(LABEL).value(false))?;
    assert!(!screen.get_by_role("checkbox")?.is_checked());
    Ok(())
}

#[test]
fn shows_error_message_with_icon() -> anyhow::Result<()> {
    let screen =
        Screen::<Checkbox>::render(CheckboxProps::new(LABEL).error("You must accept"))?;

    let error = screen.get_by_text("You must accept")?;
    assert_eq!(error.classes(), vec!["errorLabel"]);
    assert_eq!(error.children()[1].classes(), vec!["icon", "alert-circle"]);
    assert_eq!(screen.get_by_role("alert")?.id(), error.id());

    // The message describes the control but does not rename it
    let checkbox = screen.get_by_role("checkbox")?;
    assert_eq!(screen.accessible_name(checkbox.id()).as_deref(), Some(LABEL));
    Ok(())
}

#[test]
fn no_error_slot_without_error() -> anyhow::Result<()> {
    let screen = Screen::<Checkbox>::render(CheckboxProps::new(LABEL))?;
    assert!(screen.query_all_by_role("alert").is_empty());
    Ok(())
}

#[test]
fn forwards_name_tab_index_and_class_name() -> anyhow::Result<()> {
    let screen = Screen::<Checkbox>::render(
        CheckboxProps::new(LABEL)
            .name("accept")
            .tab_index(3)
            .class_name("terms"),
    )?;

    let checkbox = screen.get_by_role("checkbox")?;
    assert_eq!(checkbox.attribute("name"), Some("accept"));

    let label = &screen.manager().tree()[0];
    assert_eq!(label.tag(), Some("label"));
    assert_eq!(label.attribute("tabindex"), Some("3"));
    assert!(label.classes().contains(&"terms"));
    Ok(())
}

#[test]
fn node_ref_points_at_the_native_input() -> anyhow::Result<()> {
    let node_ref = NodeRef::new();
    let mut screen = Screen::<Checkbox>::render(CheckboxProps::new(LABEL).node_ref(&node_ref))?;

    let checkbox_id = screen.get_by_role("checkbox")?.id();
    assert_eq!(node_ref.get(), Some(checkbox_id));
    assert_eq!(screen.resolve(&node_ref)?.attribute("type"), Some("checkbox"));

    // Clicking through the ref is the same as clicking the element
    screen.click(checkbox_id)?;
    assert!(screen.resolve(&node_ref)?.is_checked());

    screen.unmount()?;
    assert_eq!(node_ref.get(), None);
    Ok(())
}

#[test]
fn renders_markup() -> anyhow::Result<()> {
    let screen = Screen::<Checkbox>::render(CheckboxProps::new(LABEL).default_value(true))?;
    assert_eq!(
        screen.html()?,
        "<label class=\"label-wrapper right label\">\
         <input checked type=\"checkbox\">\
         <span class=\"title\">Mock Checkbox</span></label>"
    );
    Ok(())
}
