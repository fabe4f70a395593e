//! In-memory document tree.
//!
//! `MemoryDocument` is an arena of nodes seeded from a typed [`Element`]. It
//! implements [`DocumentTree`] so navigation helpers can run against a
//! synthetic page, and serialises back to markup after mutation.

use smol_str::SmolStr;

use crate::markup::{Element, Node};
use crate::tree::{Display, DocumentTree};

/// Handle to a node inside a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum SlotData {
    Element {
        tag: SmolStr,
        attrs: Vec<(SmolStr, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct Slot {
    data: SlotData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed document.
///
/// Nodes detached by a mutation stay in the arena but are unreachable from
/// the root, so lookups never return them. The arena never shrinks:
/// `set_text` rewrites a lone text child in place, but every
/// `replace_with_list_copy` adds slots for the copied subtree.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    slots: Vec<Slot>,
    root: NodeId,
}

impl MemoryDocument {
    pub fn from_element(root: Element) -> Self {
        let mut doc = Self {
            slots: Vec::new(),
            root: NodeId(0),
        };
        doc.root = doc.insert(Node::Element(root), None);
        doc
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    /// Number of arena slots, detached nodes included.
    pub fn node_count(&self) -> usize {
        self.slots.len()
    }

    fn insert(&mut self, node: Node, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.slots.len());
        match node {
            Node::Text(text) => self.slots.push(Slot {
                data: SlotData::Text(text),
                parent,
                children: Vec::new(),
            }),
            Node::Element(element) => {
                let (tag, attrs, children) = element.into_parts();
                self.slots.push(Slot {
                    data: SlotData::Element { tag, attrs },
                    parent,
                    children: Vec::new(),
                });
                for child in children {
                    let child_id = self.insert(child, Some(id));
                    self.slots[id.0].children.push(child_id);
                }
            }
        }
        id
    }

    fn slot(&self, id: NodeId) -> &Slot {
        &self.slots[id.0]
    }

    fn is_element(&self, id: NodeId) -> bool {
        matches!(self.slot(id).data, SlotData::Element { .. })
    }

    fn detach_children(&mut self, id: NodeId) {
        let children = std::mem::take(&mut self.slots[id.0].children);
        for child in children {
            self.slots[child.0].parent = None;
        }
    }

    fn append(&mut self, parent: NodeId, node: Node) -> NodeId {
        let child = self.insert(node, Some(parent));
        self.slots[parent.0].children.push(child);
        child
    }

    /// Rebuild the typed subtree rooted at `id`.
    pub fn export(&self, id: NodeId) -> Node {
        let slot = self.slot(id);
        match &slot.data {
            SlotData::Text(text) => Node::Text(text.clone()),
            SlotData::Element { tag, attrs } => Node::Element(Element::from_parts(
                tag.clone(),
                attrs.clone(),
                slot.children.iter().map(|&child| self.export(child)).collect(),
            )),
        }
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.slot(id).data {
            SlotData::Element { attrs, .. } => attrs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            SlotData::Text(_) => None,
        }
    }

    fn attribute_mut(&mut self, id: NodeId, name: &str) -> Option<&mut String> {
        match &mut self.slots[id.0].data {
            SlotData::Element { attrs, .. } => {
                if let Some(pos) = attrs.iter().position(|(key, _)| key == name) {
                    Some(&mut attrs[pos].1)
                } else {
                    attrs.push((SmolStr::new(name), String::new()));
                    attrs.last_mut().map(|(_, value)| value)
                }
            }
            SlotData::Text(_) => None,
        }
    }

    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let slot = self.slot(id);
        match &slot.data {
            SlotData::Text(text) => out.push_str(text),
            SlotData::Element { .. } => {
                for &child in &slot.children {
                    self.collect_text(child, out);
                }
            }
        }
    }

    pub fn outer_html(&self, id: NodeId) -> String {
        self.export(id).to_html()
    }

    pub fn inner_html(&self, id: NodeId) -> String {
        self.slot(id)
            .children
            .iter()
            .map(|&child| self.export(child).to_html())
            .collect()
    }

    pub fn to_html(&self) -> String {
        self.outer_html(self.root)
    }
}

/// Last `display` declaration in an inline style, if any.
fn style_display(style: &str) -> Option<String> {
    style
        .split(';')
        .filter_map(|decl| decl.split_once(':'))
        .filter(|(property, _)| property.trim().eq_ignore_ascii_case("display"))
        .map(|(_, value)| value.trim().to_string())
        .last()
        .filter(|value| !value.is_empty())
}

/// Rewrite an inline style so that its only `display` declaration is `display`.
fn style_with_display(style: &str, display: Display) -> String {
    let mut decls: Vec<String> = style
        .split(';')
        .map(str::trim)
        .filter(|decl| !decl.is_empty())
        .filter(|decl| {
            decl.split_once(':')
                .map_or(true, |(property, _)| !property.trim().eq_ignore_ascii_case("display"))
        })
        .map(str::to_string)
        .collect();
    decls.push(format!("display: {}", display.as_str()));
    decls.join("; ")
}

impl DocumentTree for MemoryDocument {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        std::iter::once(self.root)
            .chain(self.descendants(&self.root))
            .find(|&node| self.attribute(node, "id") == Some(id))
    }

    fn root(&self) -> Option<NodeId> {
        Some(self.root)
    }

    fn tag_name(&self, node: &NodeId) -> String {
        match &self.slot(*node).data {
            SlotData::Element { tag, .. } => tag.to_string(),
            SlotData::Text(_) => String::new(),
        }
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.attribute(*node, "class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class))
    }

    fn parent_element(&self, node: &NodeId) -> Option<NodeId> {
        self.slot(*node).parent
    }

    fn child_elements(&self, node: &NodeId) -> Vec<NodeId> {
        self.slot(*node)
            .children
            .iter()
            .copied()
            .filter(|&child| self.is_element(child))
            .collect()
    }

    fn display(&self, node: &NodeId) -> Option<String> {
        self.attribute(*node, "style").and_then(style_display)
    }

    fn set_display(&mut self, node: &NodeId, display: Display) {
        if let Some(style) = self.attribute_mut(*node, "style") {
            *style = style_with_display(style, display);
        }
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        if !self.is_element(*node) {
            return;
        }
        let lone_text = match self.slot(*node).children[..] {
            [only] if !self.is_element(only) => Some(only),
            _ => None,
        };
        if let Some(only) = lone_text {
            if let SlotData::Text(existing) = &mut self.slots[only.0].data {
                existing.clear();
                existing.push_str(text);
                return;
            }
        }
        self.detach_children(*node);
        self.append(*node, Node::Text(text.to_string()));
    }

    fn replace_with_list_copy(&mut self, target: &NodeId, list: &NodeId) {
        let items: Vec<Node> = self
            .slot(*list)
            .children
            .iter()
            .map(|&child| self.export(child))
            .collect();
        self.detach_children(*target);
        let wrapper = Element::builder("ul").children(items).build();
        self.append(*target, Node::Element(wrapper));
    }
}
