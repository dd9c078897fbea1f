//! Results area: loading indicator, empty notice or scheme cards.

use common::scheme_view::{NO_RESULTS_TEXT, ResultsView};
use dioxus::prelude::*;

use crate::components::{loading_indicator::LoadingIndicator, search_components::scheme_result_card::SchemeResultCard};

#[component]
pub fn SchemeResultList(results: ResultsView) -> Element {
    rsx! {
        div {
            class: "results",
            match results {
                ResultsView::Loading => rsx! { LoadingIndicator {} },
                ResultsView::NoResults => rsx! { p { class: "no-results", "{NO_RESULTS_TEXT}" } },
                ResultsView::Cards(cards) => rsx! {
                    for card in cards {
                        SchemeResultCard { key: "{card.key}", card: card.clone() }
                    }
                },
            }
        }
    }
}
