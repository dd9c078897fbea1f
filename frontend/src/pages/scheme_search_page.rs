use dioxus::logger::tracing::{error, info, warn};
use dioxus::prelude::*;

use common::{
    filter_criteria::FilterCriteria,
    scheme_view::present,
    search_const::language_label,
    search_error::SearchError,
    search_state::{Completion, SearchSession},
};
use crate::{
    api::search_api::search_schemes,
    components::search_components::{
        filter_input_bar::FilterInputBar, scheme_result_list::SchemeResultList, search_alert::SearchAlert,
    },
};


/// Scheme search page: filters on top, cards below.
#[component]
pub fn SchemeSearchPage() -> Element {
    let criteria = use_signal(FilterCriteria::default);
    let mut session = use_signal(SearchSession::new);
    let view = use_memo(move || present(session.read().state()));

    let trigger_search = Callback::new(move |_: ()| {
        let snapshot = criteria.peek().clone();
        let token = session.write().begin();
        let language_name = language_label(&snapshot.language).unwrap_or("unlisted language");
        info!(?token, language = %snapshot.language, language_name, "search triggered");
        spawn(async move {
            let outcome = match search_schemes(snapshot).await {
                Ok(outcome) => outcome,
                Err(e) => Err(SearchError::Dataset(e.to_string())),
            };
            if let Err(e) = &outcome {
                error!(kind = e.kind(), "search failed: {}", e);
            }
            if session.write().complete(token, outcome) == Completion::Stale {
                warn!(?token, "discarding stale search outcome");
            }
        });
    });

    let dismiss_alert = Callback::new(move |_: ()| session.write().dismiss_error());

    let current = view.read().clone();
    rsx! {
        Title { "Search Government Schemes" }
        FilterInputBar { criteria, button: current.button, trigger_search }
        SchemeResultList { results: current.results }
        if let Some(message) = current.alert {
            SearchAlert { message, on_dismiss: dismiss_alert }
        }
    }
}
