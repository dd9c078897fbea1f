use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        Title { "Page not found" }
        div {
            class: "error-panel",
            h2 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::SchemeSearchPage {}, "Back to scheme search" }
        }
    }
}
