use dioxus::prelude::*;

/// Blocking error dialog shown after a failed search.
#[component]
pub fn SearchAlert(message: String, on_dismiss: Callback<()>) -> Element {
    rsx! {
        div {
            class: "alert-backdrop",
            div {
                class: "alert-dialog",
                role: "alertdialog",
                aria_modal: "true",
                p { "{message}" }
                button {
                    autofocus: true,
                    onclick: move |_| on_dismiss.call(()),
                    "OK"
                }
            }
        }
    }
}
