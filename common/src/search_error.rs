//! Failure reported to the search UI.

use std::fmt::Display;

use serde::{Deserialize, Serialize};


/// Why a search produced no results. Either stage failing fails the whole
/// search; no partial result list is ever shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum SearchError {
    /// The dataset query could not be executed.
    Dataset(String),
    /// At least one translation call failed.
    Translation(String),
}

impl SearchError {
    pub fn message(&self) -> &str {
        match self {
            SearchError::Dataset(msg) | SearchError::Translation(msg) => msg,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::Dataset(_) => "dataset",
            SearchError::Translation(_) => "translation",
        }
    }
}

impl Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SearchError {}
