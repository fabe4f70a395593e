//! Typed markup nodes.
//!
//! `Element` is an owned element tree used both for emitting page widgets
//! (see [`crate::control`]) and for seeding a [`crate::MemoryDocument`].
//! Construction goes through [`ElementBuilder`]; serialisation escapes every
//! attribute value and text run, so callers never concatenate markup by hand.

use markdown_weaver_escape::{FmtWriter, escape_html, escape_html_body_text};
use smol_str::SmolStr;

/// Elements serialised without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: SmolStr,
    attrs: Vec<(SmolStr, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Start building an element with the given tag name.
    pub fn builder(tag: &str) -> ElementBuilder {
        ElementBuilder {
            element: Element {
                tag: SmolStr::new(tag.to_ascii_lowercase()),
                attrs: Vec::new(),
                children: Vec::new(),
            },
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attrs(&self) -> &[(SmolStr, String)] {
        &self.attrs
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub(crate) fn into_parts(self) -> (SmolStr, Vec<(SmolStr, String)>, Vec<Node>) {
        (self.tag, self.attrs, self.children)
    }

    pub(crate) fn from_parts(
        tag: SmolStr,
        attrs: Vec<(SmolStr, String)>,
        children: Vec<Node>,
    ) -> Self {
        Self {
            tag,
            attrs,
            children,
        }
    }

    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }

    /// Serialise this element and its subtree.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Serialise only the children of this element.
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_html(&mut out);
        }
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            push_escaped_attr(out, value);
            out.push('"');
        }
        out.push('>');
        if self.is_void() {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

impl Node {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.write_html(out),
            Node::Text(text) => push_escaped_text(out, text),
        }
    }
}

// Writing into a String cannot fail.
fn push_escaped_attr(out: &mut String, s: &str) {
    let _ = escape_html(FmtWriter(out), s);
}

fn push_escaped_text(out: &mut String, s: &str) {
    let _ = escape_html_body_text(FmtWriter(out), s);
}

/// Builder for [`Element`].
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    /// Set an attribute, replacing any earlier value.
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.element.attrs.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => self.element.attrs.push((SmolStr::new(name), value)),
        }
        self
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Add a class. Repeated calls accumulate.
    pub fn class(mut self, class: &str) -> Self {
        match self.element.attrs.iter_mut().find(|(key, _)| key == "class") {
            Some((_, existing)) if existing.is_empty() => existing.push_str(class),
            Some((_, existing)) => {
                existing.push(' ');
                existing.push_str(class);
            }
            None => self
                .element
                .attrs
                .push((SmolStr::new_static("class"), class.to_string())),
        }
        self
    }

    /// Set the inline `display` style.
    pub fn display(self, display: &str) -> Self {
        self.attr("style", format!("display: {display}"))
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.element.children.push(Node::Text(text.into()));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.element.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.element
            .children
            .extend(children.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Element {
        self.element
    }
}

impl From<ElementBuilder> for Node {
    fn from(builder: ElementBuilder) -> Self {
        Node::Element(builder.build())
    }
}
