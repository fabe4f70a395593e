//! Visibility toggles for collapsible sections.
//!
//! Three variants, all flipping the target between `display: block` and
//! `display: none`:
//!
//! - [`toggle_visibility`]: target only
//! - [`toggle_with_triangle`]: target plus an indicator glyph
//! - [`toggle_with_replace_control`]: target, glyph, and a control whose text
//!   switches between open and close wording
//!
//! A missing target is an error and nothing changes. A missing indicator is
//! only logged; the target is toggled regardless.

use crate::error::DocNavError;
use crate::tree::{DocumentTree, Visibility};

/// Id of the glyph anchor paired with a replace control.
pub fn triangle_id(control_id: &str) -> String {
    format!("{control_id}-triangle")
}

fn flip<T: DocumentTree>(tree: &mut T, target_id: &str) -> Result<Visibility, DocNavError> {
    let target = tree
        .element_by_id(target_id)
        .ok_or_else(|| DocNavError::missing(target_id))?;
    let next = tree.visibility(&target).toggled();
    tree.set_display(&target, next.display());
    tracing::trace!(target_id, ?next, "toggled visibility");
    Ok(next)
}

fn set_indicator<T: DocumentTree>(tree: &mut T, id: &str, text: &str) {
    match tree.element_by_id(id) {
        Some(node) => tree.set_text(&node, text),
        None => tracing::warn!(id, "toggle indicator not found"),
    }
}

/// Flip the display state of `target_id`, returning the new state.
pub fn toggle_visibility<T: DocumentTree>(
    tree: &mut T,
    target_id: &str,
) -> Result<Visibility, DocNavError> {
    flip(tree, target_id)
}

/// Flip `target_id` and point the triangle at `triangle_id` to match.
pub fn toggle_with_triangle<T: DocumentTree>(
    tree: &mut T,
    target_id: &str,
    triangle_id: &str,
) -> Result<Visibility, DocNavError> {
    let next = flip(tree, target_id)?;
    set_indicator(tree, triangle_id, next.glyph());
    Ok(next)
}

/// Flip `target_id` and update the replace control `control_id`.
///
/// When the target opens the control reads `close_text`; when it closes the
/// control reads `open_text`. The glyph lives at `<control_id>-triangle`.
pub fn toggle_with_replace_control<T: DocumentTree>(
    tree: &mut T,
    target_id: &str,
    control_id: &str,
    open_text: &str,
    close_text: &str,
) -> Result<Visibility, DocNavError> {
    let next = flip(tree, target_id)?;
    let label = match next {
        Visibility::Shown => close_text,
        Visibility::Hidden => open_text,
    };
    set_indicator(tree, control_id, label);
    set_indicator(tree, &triangle_id(control_id), next.glyph());
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Element;
    use crate::memory::MemoryDocument;

    fn page(style: Option<&str>) -> MemoryDocument {
        let mut section = Element::builder("div").id("details").text("body");
        if let Some(style) = style {
            section = section.attr("style", style);
        }
        MemoryDocument::from_element(
            Element::builder("body")
                .child(Element::builder("a").id("tri").text("▶"))
                .child(Element::builder("a").id("more-triangle").text("▶"))
                .child(Element::builder("a").id("more").text("Show details"))
                .child(section)
                .build(),
        )
    }

    fn display_of(doc: &MemoryDocument, id: &str) -> Option<String> {
        let node = doc.element_by_id(id).unwrap();
        doc.display(&node)
    }

    fn text_of(doc: &MemoryDocument, id: &str) -> String {
        doc.text_content(doc.element_by_id(id).unwrap())
    }

    #[test]
    fn test_unset_then_toggle_twice() {
        let mut doc = page(None);
        assert_eq!(toggle_visibility(&mut doc, "details").unwrap(), Visibility::Shown);
        assert_eq!(display_of(&doc, "details").as_deref(), Some("block"));
        assert_eq!(toggle_visibility(&mut doc, "details").unwrap(), Visibility::Hidden);
        assert_eq!(display_of(&doc, "details").as_deref(), Some("none"));
    }

    #[test]
    fn test_explicit_none_opens() {
        let mut doc = page(Some("display: none"));
        toggle_visibility(&mut doc, "details").unwrap();
        assert_eq!(display_of(&doc, "details").as_deref(), Some("block"));
    }

    #[test]
    fn test_block_closes() {
        let mut doc = page(Some("display: block"));
        toggle_visibility(&mut doc, "details").unwrap();
        assert_eq!(display_of(&doc, "details").as_deref(), Some("none"));
    }

    #[test]
    fn test_missing_target_is_error() {
        let mut doc = page(None);
        let err = toggle_visibility(&mut doc, "nope").unwrap_err();
        assert!(matches!(err, DocNavError::MissingElement { ref id } if id == "nope"));
    }

    #[test]
    fn test_triangle_follows_state() {
        let mut doc = page(None);
        toggle_with_triangle(&mut doc, "details", "tri").unwrap();
        assert_eq!(text_of(&doc, "tri"), "▼");
        toggle_with_triangle(&mut doc, "details", "tri").unwrap();
        assert_eq!(text_of(&doc, "tri"), "▶");
    }

    #[test]
    fn test_missing_triangle_still_toggles() {
        let mut doc = page(None);
        let state = toggle_with_triangle(&mut doc, "details", "absent").unwrap();
        assert_eq!(state, Visibility::Shown);
        assert_eq!(display_of(&doc, "details").as_deref(), Some("block"));
    }

    #[test]
    fn test_replace_control_swaps_wording() {
        let mut doc = page(None);
        toggle_with_replace_control(&mut doc, "details", "more", "Show details", "Hide details")
            .unwrap();
        assert_eq!(text_of(&doc, "more"), "Hide details");
        assert_eq!(text_of(&doc, "more-triangle"), "▼");

        toggle_with_replace_control(&mut doc, "details", "more", "Show details", "Hide details")
            .unwrap();
        assert_eq!(text_of(&doc, "more"), "Show details");
        assert_eq!(text_of(&doc, "more-triangle"), "▶");
        assert_eq!(display_of(&doc, "details").as_deref(), Some("none"));
    }
}
