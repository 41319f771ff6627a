// Input behaviour as seen by a user

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use coreui::component::NodeRef;
use coreui::kit::components::input::{Input, InputProps, InputType};
use coreui::renderer::json::to_snapshot;
use coreui::testing::Screen;

fn counter() -> (Arc<AtomicUsize>, impl Fn(()) + Send + Sync + 'static) {
    let calls = Arc::new(AtomicUsize::new(0));
    let sink = calls.clone();
    (calls, move |()| {
        sink.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn renders_a_text_box_by_default() -> anyhow::Result<()> {
    let screen = Screen::<Input>::render(InputProps::new().placeholder("Name"))?;
    let input = screen.get_by_role("textbox")?;
    assert_eq!(input.attribute("type"), Some("text"));
    assert_eq!(input.attribute("placeholder"), Some("Name"));
    assert_eq!(input.classes(), vec!["input"]);
    Ok(())
}

#[test]
fn class_list_reflects_styling_flags() -> anyhow::Result<()> {
    let screen = Screen::<Input>::render(
        InputProps::new()
            .class_name("custom")
            .fill_width(true)
            .error(true),
    )?;
    assert_eq!(
        screen.get_by_role("textbox")?.attribute("class"),
        Some("input custom fillWidth error")
    );
    Ok(())
}

#[test]
fn typing_notifies_without_changing_the_value() -> anyhow::Result<()> {
    let (calls, on_change) = counter();
    let mut screen =
        Screen::<Input>::render(InputProps::new().value("old").on_change(on_change))?;

    let id = screen.get_by_role("textbox")?.id();
    assert!(screen.type_text(id, "new")?);

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(screen.get_by_role("textbox")?.attribute("value"), Some("old"));

    // The caller owns the value
    screen.rerender(InputProps::new().value("new"))?;
    assert_eq!(screen.get_by_role("textbox")?.attribute("value"), Some("new"));
    Ok(())
}

#[test]
fn disabled_and_read_only_inputs_swallow_typing() -> anyhow::Result<()> {
    let (calls, on_change) = counter();
    let mut screen =
        Screen::<Input>::render(InputProps::new().disabled(true).on_change(on_change))?;
    let id = screen.get_by_role("textbox")?.id();
    assert!(!screen.type_text(id, "x")?);

    let (read_only_calls, on_change) = counter();
    let mut read_only =
        Screen::<Input>::render(InputProps::new().read_only(true).on_change(on_change))?;
    let id = read_only.get_by_role("textbox")?.id();
    assert!(read_only.get_by_role("textbox")?.has_attribute("readonly"));
    assert!(!read_only.type_text(id, "x")?);

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(read_only_calls.load(Ordering::SeqCst), 0);
    Ok(())
}

#[test]
fn roles_follow_the_input_type() -> anyhow::Result<()> {
    let number = Screen::<Input>::render(InputProps::new().input_type(InputType::Number))?;
    assert!(number.get_by_role("spinbutton").is_ok());

    let email = Screen::<Input>::render(InputProps::new().input_type(InputType::Email))?;
    assert!(email.get_by_role("textbox").is_ok());

    let password = Screen::<Input>::render(InputProps::new().input_type(InputType::Password))?;
    assert!(password.get_by_role("textbox").is_err());
    assert_eq!(
        password.manager().tree()[0].attribute("type"),
        Some("password")
    );
    Ok(())
}

#[test]
fn checkbox_typed_input_notifies_on_click() -> anyhow::Result<()> {
    let (calls, on_change) = counter();
    let mut screen = Screen::<Input>::render(
        InputProps::new()
            .input_type(InputType::Checkbox)
            .on_change(on_change),
    )?;

    let id = screen.get_by_role("checkbox")?.id();
    assert!(screen.click(id)?);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    // Fully controlled: no checked state of its own
    assert!(!screen.get_by_role("checkbox")?.is_checked());
    Ok(())
}

#[test]
fn node_ref_is_forwarded() -> anyhow::Result<()> {
    let node_ref = NodeRef::new();
    let screen = Screen::<Input>::render(InputProps::new().name("q").node_ref(&node_ref))?;
    assert_eq!(screen.resolve(&node_ref)?.attribute("name"), Some("q"));
    Ok(())
}

#[test]
fn snapshot_lists_attributes_and_listeners() -> anyhow::Result<()> {
    let (_, on_change) = counter();
    let screen = Screen::<Input>::render(
        InputProps::new()
            .name("email")
            .input_type(InputType::Email)
            .error(true)
            .on_change(on_change),
    )?;

    let snapshot = to_snapshot(screen.manager().tree())?;
    assert_eq!(
        snapshot,
        serde_json::json!([{
            "tag": "input",
            "attributes": {"class": "input error", "name": "email", "type": "email"},
            "listeners": ["input"],
            "children": []
        }])
    );
    Ok(())
}
