//! Renderable markup tree.
//!
//! Views build a [`Node`] tree once and hand it to whichever surface needs
//! it: the HTML renderer below, the preview binary, or tests. The Leptos
//! frontend renders the same view models through its own components.

use core::fmt::Write as _;

use serde::Serialize;

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Element(Element),
    Text { text: String },
}

/// An element with classes, attributes and children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: &'static str,
    pub classes: Vec<&'static str>,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add one or more whitespace-separated classes. Duplicates are skipped.
    pub fn class(mut self, classes: &'static str) -> Self {
        for class in classes.split_whitespace() {
            if !self.classes.contains(&class) {
                self.classes.push(class);
            }
        }
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Node::Element(value)
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text { .. } => None,
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text { text } => out.push_str(text),
            Node::Element(e) => {
                for child in &e.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Every element (this one included) carrying `class`, in document order.
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(&mut |e| {
            if e.has_class(class) {
                found.push(e);
            }
        });
        found
    }

    /// Every element (this one included) with the given tag, in document order.
    pub fn find_by_tag(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(&mut |e| {
            if e.tag == tag {
                found.push(e);
            }
        });
        found
    }

    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        if let Node::Element(e) = self {
            visit(e);
            for child in &e.children {
                child.walk(visit);
            }
        }
    }

    /// Render to an HTML fragment. Output is deterministic.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text { text } => escape_into(text, out),
            Node::Element(e) => {
                out.push('<');
                out.push_str(e.tag);
                if !e.classes.is_empty() {
                    out.push_str(" class=\"");
                    escape_into(&e.classes.join(" "), out);
                    out.push('"');
                }
                for (name, value) in &e.attrs {
                    let _ = write!(out, " {name}=\"");
                    escape_into(value, out);
                    out.push('"');
                }
                out.push('>');
                for child in &e.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", e.tag);
            }
        }
    }
}

fn escape_into(raw: &str, out: &mut String) {
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}

/// Escape a string for use in HTML text or attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    escape_into(raw, &mut out);
    out
}
