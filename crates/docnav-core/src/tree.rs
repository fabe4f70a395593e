//! Document tree abstraction.
//!
//! Every operation in this crate works against a [`DocumentTree`] passed in by
//! the caller. The browser implementation lives in `docnav-browser`; the
//! in-memory one is [`crate::MemoryDocument`].

/// Indicator glyph for an open section (▼).
pub const OPEN_GLYPH: &str = "\u{25BC}";

/// Indicator glyph for a closed section (▶).
pub const CLOSED_GLYPH: &str = "\u{25B6}";

/// Value written to an element's inline `display` style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

impl Display {
    pub fn as_str(self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::None => "none",
        }
    }
}

/// Open/closed state of a collapsible element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    /// Interpret a raw inline `display` value.
    ///
    /// An unset or empty value counts as hidden: collapsible sections are
    /// closed by the stylesheet before any inline style has been written.
    pub fn from_display(display: Option<&str>) -> Self {
        match display.map(str::trim) {
            None | Some("") => Visibility::Hidden,
            Some(value) if value.eq_ignore_ascii_case("none") => Visibility::Hidden,
            Some(_) => Visibility::Shown,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Visibility::Shown => Visibility::Hidden,
            Visibility::Hidden => Visibility::Shown,
        }
    }

    pub fn display(self) -> Display {
        match self {
            Visibility::Shown => Display::Block,
            Visibility::Hidden => Display::None,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Visibility::Shown => OPEN_GLYPH,
            Visibility::Hidden => CLOSED_GLYPH,
        }
    }
}

/// A rendered document that navigation helpers can read and restyle.
///
/// Implementations only need the primitive accessors; traversal helpers are
/// provided on top of them. Node handles are cheap clones referring into the
/// tree, never owned copies of a subtree.
pub trait DocumentTree {
    type Node: Clone + PartialEq;

    /// First attached element with this id, in document order.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// Root element of the document.
    fn root(&self) -> Option<Self::Node>;

    /// Lower-case tag name.
    fn tag_name(&self, node: &Self::Node) -> String;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    fn parent_element(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Element children in document order. Text is skipped.
    fn child_elements(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Raw inline `display` style, `None` when unset.
    fn display(&self, node: &Self::Node) -> Option<String>;

    fn set_display(&mut self, node: &Self::Node, display: Display);

    /// Replace the text content of an element.
    fn set_text(&mut self, node: &Self::Node, text: &str);

    /// Replace the content of `target` with a fresh `ul` holding a copy of the
    /// children of `list`.
    fn replace_with_list_copy(&mut self, target: &Self::Node, list: &Self::Node);

    fn is_tag(&self, node: &Self::Node, tag: &str) -> bool {
        self.tag_name(node).eq_ignore_ascii_case(tag)
    }

    fn visibility(&self, node: &Self::Node) -> Visibility {
        Visibility::from_display(self.display(node).as_deref())
    }

    /// All descendant elements of `node` in preorder, excluding `node`.
    fn descendants(&self, node: &Self::Node) -> Vec<Self::Node> {
        let mut out = Vec::new();
        let mut stack: Vec<Self::Node> = self.child_elements(node).into_iter().rev().collect();
        while let Some(next) = stack.pop() {
            stack.extend(self.child_elements(&next).into_iter().rev());
            out.push(next);
        }
        out
    }

    /// Whether any proper ancestor of `node` has the given tag.
    fn has_ancestor_tag(&self, node: &Self::Node, tag: &str) -> bool {
        let mut current = self.parent_element(node);
        while let Some(ancestor) = current {
            if self.is_tag(&ancestor, tag) {
                return true;
            }
            current = self.parent_element(&ancestor);
        }
        false
    }
}
