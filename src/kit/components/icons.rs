// Icons used by CoreUI kit components

use crate::component::{Component, ComponentError, Context, Node};

/// Alert circle icon shown next to validation messages
#[derive(Debug, Default)]
pub struct AlertCircleIcon;

/// Build the alert circle `<svg>`
pub fn alert_circle_view() -> Node {
    Node::element("svg")
        .attr("class", "icon alert-circle")
        .attr("viewBox", "0 0 24 24")
        .attr("aria-hidden", "true")
        .child(
            Node::element("circle")
                .attr("cx", "12")
                .attr("cy", "12")
                .attr("r", "10"),
        )
        .child(
            Node::element("line")
                .attr("x1", "12")
                .attr("y1", "8")
                .attr("x2", "12")
                .attr("y2", "12"),
        )
        .child(
            Node::element("line")
                .attr("x1", "12")
                .attr("y1", "16")
                .attr("x2", "12.01")
                .attr("y2", "16"),
        )
}

impl Component for AlertCircleIcon {
    type Props = ();

    fn create(_props: Self::Props, _context: Context) -> Self {
        Self
    }

    fn update(&mut self, _props: Self::Props) -> Result<(), ComponentError> {
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        Ok(vec![alert_circle_view()])
    }
}
