//! docnav-core: documentation-page navigation logic without browser dependencies.
//!
//! This crate provides:
//! - `DocumentTree` trait abstracting the rendered page
//! - `MemoryDocument` - arena-backed tree for tests and offline use
//! - `Element` / `ElementBuilder` - typed markup with escaped serialisation
//! - Visibility toggles, replace-control emission, TOC extraction, copying,
//!   collapsing and active-page reveal - all generic over `DocumentTree`
//! - `InitPlan` / `run_init` - the page-load sequence as data

pub mod config;
pub mod control;
pub mod error;
pub mod init;
pub mod markup;
pub mod memory;
#[cfg(test)]
mod test_log;
pub mod toc;
pub mod toggle;
pub mod tree;

pub use config::{CopyStep, DEFAULT_NAVIGATION_ID, InitPlan};
pub use control::{ReplaceControl, TriangleControl, js_string_literal};
pub use error::DocNavError;
pub use init::{InitReport, run_init};
pub use markup::{Element, ElementBuilder, Node};
pub use memory::{MemoryDocument, NodeId};
pub use toc::{
    CollapseReport, CopyOutcome, active_page_links, charged_items, collapse_inner_only,
    copy_second_level_list, find_second_level_list, nested_lists, reveal_active_ancestors,
    top_level_items,
};
pub use toggle::{
    toggle_visibility, toggle_with_replace_control, toggle_with_triangle, triangle_id,
};
pub use tree::{CLOSED_GLYPH, Display, DocumentTree, OPEN_GLYPH, Visibility};
