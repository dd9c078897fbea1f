//! View models derived from the search state. The UI renders these as-is.

use serde::{Deserialize, Serialize};

use crate::{scheme_record::TranslatedSchemeRecord, search_state::SearchState};

pub const SEARCH_LABEL: &str = "Search";
pub const SEARCHING_LABEL: &str = "Searching...";
pub const LOADING_TEXT: &str = "Loading schemes...";
pub const NO_RESULTS_TEXT: &str = "No schemes found";
pub const VISIT_WEBSITE_LABEL: &str = "Visit Website";


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchButtonView {
    pub label: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDetail {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeCard {
    /// Stable key for list rendering, taken from the scheme id.
    pub key: String,
    pub title: String,
    pub details: Vec<CardDetail>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResultsView {
    Loading,
    NoResults,
    Cards(Vec<SchemeCard>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchView {
    pub button: SearchButtonView,
    pub results: ResultsView,
    /// Blocking alert text, set only after a failed search.
    pub alert: Option<String>,
}

fn detail(label: &str, value: impl Into<String>) -> CardDetail {
    CardDetail { label: label.to_string(), value: value.into() }
}

impl From<&TranslatedSchemeRecord> for SchemeCard {
    fn from(record: &TranslatedSchemeRecord) -> Self {
        let income = record.income.as_ref().map(|i| i.to_string()).unwrap_or_default();
        SchemeCard {
            key: record.id.to_string(),
            title: record.scheme.clone(),
            details: vec![
                detail("Income Level", income),
                detail("Description", record.description.clone()),
                detail("Region", record.region.clone()),
                detail("Education", record.education.clone()),
                detail("Organization", record.organization.clone()),
            ],
            link: record.website().map(str::to_string),
        }
    }
}

pub fn present(state: &SearchState) -> SearchView {
    let loading = state.is_loading();
    let button = SearchButtonView {
        label: if loading { SEARCHING_LABEL } else { SEARCH_LABEL }.to_string(),
        disabled: loading,
    };
    let results = match state {
        SearchState::Loading => ResultsView::Loading,
        SearchState::Loaded(records) if !records.is_empty() => {
            ResultsView::Cards(records.iter().map(SchemeCard::from).collect())
        }
        SearchState::Idle | SearchState::Loaded(_) | SearchState::Failed(_) => ResultsView::NoResults,
    };
    let alert = state.error().map(|e| format!("Error: {}", e.message()));
    SearchView { button, results, alert }
}
