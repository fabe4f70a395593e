//! `DocumentTree` over the browser DOM.

use docnav_core::{Display, DocumentTree};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// The live page document.
#[derive(Debug, Clone)]
pub struct BrowserDocument {
    document: Document,
}

impl BrowserDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The document of the current window, if there is one.
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self::new(document))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// `node` as an HTML element, when it is one.
fn html_element(node: &Element) -> Option<&HtmlElement> {
    node.dyn_ref::<HtmlElement>()
}

impl DocumentTree for BrowserDocument {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn tag_name(&self, node: &Element) -> String {
        node.tag_name().to_ascii_lowercase()
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn parent_element(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn child_elements(&self, node: &Element) -> Vec<Element> {
        let children = node.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .collect()
    }

    fn display(&self, node: &Element) -> Option<String> {
        let value = html_element(node)?
            .style()
            .get_property_value("display")
            .ok()?;
        if value.is_empty() { None } else { Some(value) }
    }

    fn set_display(&mut self, node: &Element, display: Display) {
        let Some(element) = html_element(node) else {
            tracing::debug!(tag = %node.tag_name(), "cannot style non-HTML element");
            return;
        };
        if let Err(e) = element.style().set_property("display", display.as_str()) {
            tracing::warn!(error = ?e, "failed to set display");
        }
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn replace_with_list_copy(&mut self, target: &Element, list: &Element) {
        target.set_inner_html(&format!("<ul>{}</ul>", list.inner_html()));
    }
}
