//! Table-of-contents rearrangement.
//!
//! The site generator renders each TOC as `.toc > ul > li` with nested `ul`s
//! under items that have children. These helpers pick second-level lists out
//! of a TOC and copy them into sidebar widgets, collapse inner-only TOCs down
//! to their nested navigation, and expand the navigation around the active
//! page.

use crate::error::DocNavError;
use crate::tree::{Display, DocumentTree};

/// Class of the element wrapping a rendered TOC.
pub const TOC_CLASS: &str = "toc";
/// Class of a TOC wrapper whose top level should collapse to nested lists.
pub const INNER_ONLY_CLASS: &str = "inner-only";
/// Class of anchors linking to a page.
pub const PAGE_CLASS: &str = "page";
/// Class of the anchor for the page being viewed.
pub const ACTIVE_CLASS: &str = "active";
/// Tag that stops the upward walk of [`reveal_active_ancestors`].
pub const SECTION_TAG: &str = "div";

/// Result of [`copy_second_level_list`].
#[derive(Debug)]
pub enum CopyOutcome {
    Copied,
    /// Nothing was written; the destination is unchanged.
    Skipped(DocNavError),
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied)
    }
}

/// Counts from [`collapse_inner_only`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollapseReport {
    pub hidden_items: usize,
    pub expanded_items: usize,
    pub hidden_links: usize,
}

/// Whether `item` sits in a `.toc > ul > li` position.
fn is_top_level_item<T: DocumentTree>(tree: &T, item: &T::Node) -> bool {
    if !tree.is_tag(item, "li") {
        return false;
    }
    let Some(list) = tree.parent_element(item) else {
        return false;
    };
    if !tree.is_tag(&list, "ul") {
        return false;
    }
    tree.parent_element(&list)
        .is_some_and(|toc| tree.has_class(&toc, TOC_CLASS))
}

/// Top-level TOC items below `container`, in document order.
///
/// The `.toc` wrapper may be `container` itself or one of its ancestors.
pub fn top_level_items<T: DocumentTree>(tree: &T, container: &T::Node) -> Vec<T::Node> {
    tree.descendants(container)
        .into_iter()
        .filter(|node| is_top_level_item(tree, node))
        .collect()
}

/// Outermost `ul` elements below `item`.
///
/// Lists nested inside one of these are not counted.
pub fn nested_lists<T: DocumentTree>(tree: &T, item: &T::Node) -> Vec<T::Node> {
    let mut out = Vec::new();
    let mut stack: Vec<T::Node> = tree.child_elements(item).into_iter().rev().collect();
    while let Some(node) = stack.pop() {
        if tree.is_tag(&node, "ul") {
            out.push(node);
        } else {
            stack.extend(tree.child_elements(&node).into_iter().rev());
        }
    }
    out
}

/// Top-level items of the TOC in `toc_parent_id` that hold a nested list.
pub fn charged_items<T: DocumentTree>(
    tree: &T,
    toc_parent_id: &str,
) -> Result<Vec<T::Node>, DocNavError> {
    let container = tree
        .element_by_id(toc_parent_id)
        .ok_or_else(|| DocNavError::missing(toc_parent_id))?;
    Ok(top_level_items(tree, &container)
        .into_iter()
        .filter(|item| !nested_lists(tree, item).is_empty())
        .collect())
}

/// The second-level list of the `index`th charged item of a TOC.
///
/// A charged item is expected to hold exactly one nested list. When it holds
/// more, the anomaly is logged and the first list is returned.
pub fn find_second_level_list<T: DocumentTree>(
    tree: &T,
    toc_parent_id: &str,
    index: usize,
) -> Result<T::Node, DocNavError> {
    let charged = charged_items(tree, toc_parent_id)?;
    let Some(item) = charged.get(index) else {
        return Err(DocNavError::IndexOutOfRange {
            container: toc_parent_id.to_string(),
            index,
            available: charged.len(),
        });
    };

    let lists = nested_lists(tree, item);
    if lists.len() != 1 {
        tracing::warn!(
            toc_parent_id,
            index,
            count = lists.len(),
            "unexpected number of second-level lists, using the first"
        );
    }
    // Charged items have at least one list.
    lists
        .into_iter()
        .next()
        .ok_or(DocNavError::IndexOutOfRange {
            container: toc_parent_id.to_string(),
            index,
            available: charged.len(),
        })
}

/// Copy a TOC second-level list into `destination_id`, wrapped in a new `ul`.
///
/// Leaves the destination untouched when it is missing or when no list can
/// be extracted.
pub fn copy_second_level_list<T: DocumentTree>(
    tree: &mut T,
    toc_parent_id: &str,
    index: usize,
    destination_id: &str,
) -> CopyOutcome {
    let Some(destination) = tree.element_by_id(destination_id) else {
        tracing::debug!(destination_id, "copy destination not on this page");
        return CopyOutcome::Skipped(DocNavError::missing(destination_id));
    };

    match find_second_level_list(&*tree, toc_parent_id, index) {
        Ok(list) => {
            tree.replace_with_list_copy(&destination, &list);
            tracing::debug!(toc_parent_id, index, destination_id, "copied toc list");
            CopyOutcome::Copied
        }
        Err(error) => {
            tracing::warn!(%error, destination_id, "toc list not copied");
            CopyOutcome::Skipped(error)
        }
    }
}

/// Top-level items of TOCs wrapped in an `.inner-only` element.
fn inner_only_items<T: DocumentTree>(tree: &T, root: &T::Node) -> Vec<T::Node> {
    tree.descendants(root)
        .into_iter()
        .filter(|node| {
            is_top_level_item(tree, node)
                && tree
                    .parent_element(node)
                    .and_then(|list| tree.parent_element(&list))
                    .and_then(|toc| tree.parent_element(&toc))
                    .is_some_and(|wrapper| tree.has_class(&wrapper, INNER_ONLY_CLASS))
        })
        .collect()
}

/// Collapse every inner-only TOC to its nested navigation.
///
/// Leaf items are hidden. Items with a nested list are shown with their own
/// page link hidden, so only the nested entries remain.
pub fn collapse_inner_only<T: DocumentTree>(tree: &mut T) -> CollapseReport {
    let mut report = CollapseReport::default();
    let Some(root) = tree.root() else {
        return report;
    };

    let items = inner_only_items(&*tree, &root);

    for item in items {
        if nested_lists(&*tree, &item).is_empty() {
            tree.set_display(&item, Display::None);
            report.hidden_items += 1;
            continue;
        }

        tree.set_display(&item, Display::Block);
        report.expanded_items += 1;

        let links: Vec<T::Node> = tree
            .child_elements(&item)
            .into_iter()
            .filter(|child| tree.is_tag(child, "a") && tree.has_class(child, PAGE_CLASS))
            .collect();
        for link in links {
            tree.set_display(&link, Display::None);
            report.hidden_links += 1;
        }
    }

    tracing::debug!(?report, "collapsed inner-only tocs");
    report
}

/// Anchors for the current page inside `navigation_id`.
pub fn active_page_links<T: DocumentTree>(tree: &T, navigation_id: &str) -> Vec<T::Node> {
    let Some(navigation) = tree.element_by_id(navigation_id) else {
        return Vec::new();
    };
    tree.descendants(&navigation)
        .into_iter()
        .filter(|node| {
            tree.is_tag(node, "a")
                && tree.has_class(node, PAGE_CLASS)
                && tree.has_class(node, ACTIVE_CLASS)
                && tree.has_ancestor_tag(node, "ul")
        })
        .collect()
}

/// Expand every list enclosing the active page link.
///
/// Walks up from the link, showing each `ul`, and stops at the first `div`.
/// Returns the number of lists revealed.
pub fn reveal_active_ancestors<T: DocumentTree>(tree: &mut T, navigation_id: &str) -> usize {
    let active = active_page_links(&*tree, navigation_id);
    if active.len() > 1 {
        tracing::warn!(
            navigation_id,
            count = active.len(),
            "more than one active page link, using the first"
        );
    }
    let Some(link) = active.into_iter().next() else {
        tracing::debug!(navigation_id, "no active page link");
        return 0;
    };

    let mut revealed = 0;
    let mut current = Some(link);
    while let Some(node) = current {
        if tree.is_tag(&node, "ul") {
            tree.set_display(&node, Display::Block);
            revealed += 1;
        } else if tree.is_tag(&node, SECTION_TAG) {
            break;
        }
        current = tree.parent_element(&node);
    }
    revealed
}
