//! Error types for docnav operations.
//!
//! Nothing here is fatal to a page. Callers at the browser boundary log these
//! and carry on.

use miette::Diagnostic;

/// Main error type for docnav operations
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum DocNavError {
    /// No element with the given id is attached to the document
    #[error("no element with id `{id}`")]
    #[diagnostic(code(docnav::missing_element))]
    MissingElement { id: String },

    /// Requested charged item does not exist
    #[error(
        "index >= number-of-second-level-lists in `{container}`, index: {index}, number-of-second-level-lists: {available}"
    )]
    #[diagnostic(
        code(docnav::index_out_of_range),
        help("only TOC items holding a nested list are counted")
    )]
    IndexOutOfRange {
        container: String,
        index: usize,
        available: usize,
    },

    /// Init plan failed validation
    #[error("invalid init plan: {0}")]
    #[diagnostic(code(docnav::invalid_plan))]
    InvalidPlan(String),

    /// Init plan JSON could not be parsed
    #[error(transparent)]
    #[diagnostic(code(docnav::json))]
    Json(#[from] serde_json::Error),
}

impl DocNavError {
    pub(crate) fn missing(id: impl Into<String>) -> Self {
        Self::MissingElement { id: id.into() }
    }
}
