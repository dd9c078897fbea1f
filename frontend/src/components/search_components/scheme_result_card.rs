//! Card showing one translated scheme.

use common::scheme_view::{SchemeCard, VISIT_WEBSITE_LABEL};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdOpenInNew};

#[component]
pub fn SchemeResultCard(card: SchemeCard) -> Element {
    rsx! {
        div {
            class: "scheme-card",
            h3 { "{card.title}" }
            for detail in card.details.iter() {
                p {
                    key: "{detail.label}",
                    strong { "{detail.label}:" }
                    " {detail.value}"
                }
            }
            if let Some(link) = card.link.clone() {
                a {
                    class: "scheme-link-button",
                    href: "{link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{VISIT_WEBSITE_LABEL} "
                    Icon { icon: MdOpenInNew, style: "width: 14px; height: 14px; vertical-align: middle;" }
                }
            }
        }
    }
}
