//! Page-load configuration.
//!
//! An [`InitPlan`] lists the TOC lists to copy into sidebar widgets and names
//! the navigation container. The default plan matches the documentation site
//! layout; pages may supply their own as JSON or as a JS object.

use serde::{Deserialize, Serialize};

use crate::error::DocNavError;

/// Default id of the navigation container.
pub const DEFAULT_NAVIGATION_ID: &str = "navigation";

/// Copy the `index`th second-level list of `source` into `destination`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyStep {
    pub source: String,
    pub index: usize,
    pub destination: String,
}

impl CopyStep {
    pub fn new(source: impl Into<String>, index: usize, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            index,
            destination: destination.into(),
        }
    }
}

/// Everything `init` does on page load, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InitPlan {
    pub copies: Vec<CopyStep>,
    pub navigation_id: String,
    /// Also collapse inner-only TOCs before revealing the active page.
    pub collapse_inner_only: bool,
}

impl Default for InitPlan {
    fn default() -> Self {
        Self {
            copies: default_copies(),
            navigation_id: DEFAULT_NAVIGATION_ID.to_string(),
            collapse_inner_only: false,
        }
    }
}

fn default_copies() -> Vec<CopyStep> {
    [
        ("ethAddressToc", 0, "addressAliasList"),
        ("ethAddressToc", 1, "senderList"),
        ("ethContractToc", 0, "abiList"),
        ("ethContractToc", 1, "compilationList"),
        ("ethLanguageToc", 0, "solidityList"),
        ("ethNodeToc", 0, "chainIdList"),
        ("ethNodeToc", 1, "urlList"),
        ("ethTransactionToc", 0, "gasList"),
        ("ethTransactionToc", 1, "nonceList"),
    ]
    .into_iter()
    .map(|(source, index, destination)| CopyStep::new(source, index, destination))
    .collect()
}

impl InitPlan {
    /// Parse and validate a plan from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, DocNavError> {
        let plan: Self = serde_json::from_str(json)?;
        plan.validate()?;
        Ok(plan)
    }

    pub fn validate(&self) -> Result<(), DocNavError> {
        if self.navigation_id.trim().is_empty() {
            return Err(DocNavError::InvalidPlan(
                "navigationId must not be empty".to_string(),
            ));
        }
        for (position, step) in self.copies.iter().enumerate() {
            if step.source.trim().is_empty() || step.destination.trim().is_empty() {
                return Err(DocNavError::InvalidPlan(format!(
                    "copy step {position} has an empty source or destination"
                )));
            }
        }
        Ok(())
    }
}
