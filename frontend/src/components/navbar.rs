//! Page header with the app title.

use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;


#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "app-container",
            h1 { class: "title", "Search Government Schemes" }
            GlobalErrorBoundary {
                boundary_name: "Navbar".to_string(),
                Outlet::<Route> {}
            }
        }
    }
}
