//! Client API calls for the scheme search.

use common::{filter_criteria::FilterCriteria, search_state::SearchOutcome};
use dioxus::prelude::*;


/// `Err` means the call itself failed or the server is misconfigured; a
/// dataset or translation failure arrives as an `Ok(Err(..))` outcome.
#[server]
pub async fn search_schemes(criteria: FilterCriteria) -> Result<SearchOutcome, ServerFnError> {
    let x = backend::api::search::search_schemes(criteria).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
