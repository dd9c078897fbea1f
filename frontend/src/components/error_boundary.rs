//! Error boundary components for render failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                rsx! {
                    div {
                        class: "error-panel",
                        h1 { "Something went wrong" }
                        p { "Boundary: {boundary_name}" }
                        a { href: "/", "Back to scheme search" }
                        pre { "{err:#?}" }
                    }
                }
            },
            children
        }
    }
}
