//! Inserting typed markup into the page.

use docnav_core::{DocNavError, Element};

use crate::BrowserDocument;

/// Append `element` as the last child of the element with id `parent_id`.
pub fn append_element(
    doc: &BrowserDocument,
    parent_id: &str,
    element: &Element,
) -> Result<(), DocNavError> {
    let parent = doc
        .document()
        .get_element_by_id(parent_id)
        .ok_or_else(|| DocNavError::MissingElement {
            id: parent_id.to_string(),
        })?;
    if let Err(e) = parent.insert_adjacent_html("beforeend", &element.to_html()) {
        tracing::warn!(error = ?e, parent_id, "failed to insert markup");
    }
    Ok(())
}
