//! Card, button, table and badge primitives.

use crate::markup::{Element, Node};
use crate::style::{self, BadgeTone};

/// A titled card. `actions` are rendered as inert buttons in the header.
pub fn card<I, S>(title: &str, actions: I, content: Vec<Node>) -> Node
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let buttons: Vec<Node> = actions.into_iter().map(|label| button(label.as_ref())).collect();

    let mut header = Element::new("div")
        .class(style::CARD_HEADER)
        .child(Element::new("h2").class(style::CARD_TITLE).child(Node::text(title)));
    if !buttons.is_empty() {
        header = header.child(Element::new("div").class(style::CARD_ACTIONS).children(buttons));
    }

    Element::new("div")
        .class(style::CARD)
        .child(header)
        .child(Element::new("div").class(style::CARD_CONTENT).children(content))
        .into()
}

/// A labelled button with no behaviour attached.
pub fn button(label: &str) -> Node {
    Element::new("button")
        .class(style::BUTTON)
        .attr("type", "button")
        .child(Node::text(label))
        .into()
}

/// Muted placeholder paragraph.
pub fn placeholder(text: &str) -> Node {
    Element::new("p")
        .class(style::PLACEHOLDER)
        .child(Node::text(text))
        .into()
}

/// Small coloured label. Without a tone only the base class is applied.
pub fn badge(label: &str, tone: Option<BadgeTone>) -> Node {
    let mut el = Element::new("span").class(style::BADGE);
    if let Some(tone) = tone {
        el = el.class(tone.class());
    }
    el.child(Node::text(label)).into()
}

/// Table with a header row and pre-built cells.
pub fn table(headers: &[&str], rows: Vec<Vec<Node>>) -> Node {
    let head = Element::new("thead").child(
        Element::new("tr").children(
            headers
                .iter()
                .map(|h| Element::new("th").child(Node::text(*h))),
        ),
    );
    let body = Element::new("tbody").children(
        rows.into_iter()
            .map(|cells| Element::new("tr").children(cells)),
    );

    Element::new("table")
        .class(style::TABLE)
        .child(head)
        .child(body)
        .into()
}

/// A `<td>` wrapping `content`.
pub fn cell(content: Node, classes: &[&'static str]) -> Node {
    classes
        .iter()
        .fold(Element::new("td"), |td, class| td.class(*class))
        .child(content)
        .into()
}
