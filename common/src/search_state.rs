//! Search lifecycle state and request tokens for overlapping searches.

use serde::{Deserialize, Serialize};

use crate::{scheme_record::TranslatedSchemeRecord, search_error::SearchError};


/// Result of one search as seen by the UI.
pub type SearchOutcome = Result<Vec<TranslatedSchemeRecord>, SearchError>;

/// Monotonic id handed out for every triggered search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct SearchToken(pub u64);

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<TranslatedSchemeRecord>),
    Failed(SearchError),
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    /// Records to show. Empty for every state but `Loaded`.
    pub fn records(&self) -> &[TranslatedSchemeRecord] {
        match self {
            SearchState::Loaded(records) => records,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&SearchError> {
        match self {
            SearchState::Failed(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Completion {
    Applied,
    /// A newer search was started after this one; its outcome was dropped.
    Stale,
}

/// Owns the [`SearchState`] and decides which search outcome may write it.
/// Only the most recently started search is allowed to complete.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchSession {
    state: SearchState,
    latest: SearchToken,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn latest_token(&self) -> SearchToken {
        self.latest
    }

    /// Start a search: issue a fresh token and move to `Loading`.
    pub fn begin(&mut self) -> SearchToken {
        self.latest = SearchToken(self.latest.0 + 1);
        self.state = SearchState::Loading;
        self.latest
    }

    pub fn complete(&mut self, token: SearchToken, outcome: SearchOutcome) -> Completion {
        if token != self.latest {
            return Completion::Stale;
        }
        self.state = match outcome {
            Ok(records) => SearchState::Loaded(records),
            Err(e) => SearchState::Failed(e),
        };
        Completion::Applied
    }

    /// Close the error alert; the results area keeps showing no results.
    pub fn dismiss_error(&mut self) {
        if let SearchState::Failed(_) = self.state {
            self.state = SearchState::Loaded(vec![]);
        }
    }
}
