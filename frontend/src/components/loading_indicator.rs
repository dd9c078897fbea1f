use common::scheme_view::LOADING_TEXT;
use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        p { class: "loading", "{LOADING_TEXT}" }
    }
}
