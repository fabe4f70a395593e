//! Browser DOM layer for docnav.
//!
//! Implements `DocumentTree` over the live page through `web-sys`, so every
//! operation in `docnav-core` can run against the real document. It assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `document`: `BrowserDocument`, the `DocumentTree` implementation
//! - `mount`: inserting typed markup into the page
//!
//! # Re-exports
//!
//! This crate re-exports `docnav-core` for convenience, so consumers only need
//! to depend on `docnav-browser`.

// Re-export core crate
pub use docnav_core;
pub use docnav_core::*;

pub mod document;
pub mod mount;

pub use document::BrowserDocument;
pub use mount::append_element;
