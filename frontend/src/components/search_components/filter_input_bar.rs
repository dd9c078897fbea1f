//! Filter inputs, language selector and search button.

use common::{
    filter_criteria::{FilterCriteria, FilterField},
    scheme_view::SearchButtonView,
    search_const::SUPPORTED_LANGUAGES,
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

const TEXT_FIELDS: [FilterField; 5] = [
    FilterField::Scheme,
    FilterField::Income,
    FilterField::Education,
    FilterField::Region,
    FilterField::Organization,
];

#[component]
pub fn FilterInputBar(criteria: Signal<FilterCriteria>, button: SearchButtonView, trigger_search: Callback<()>) -> Element {
    rsx! {
        div {
            class: "filters",
            for field in TEXT_FIELDS {
                FilterTextInput { key: "{field}", field, criteria, trigger_search }
            }
            LanguageSelect { criteria }
            button {
                class: "search-button",
                disabled: button.disabled,
                onclick: move |_| trigger_search.call(()),
                Icon { icon: MdSearch, style: "width: 18px; height: 18px; vertical-align: middle;" }
                " {button.label}"
            }
        }
    }
}

#[component]
fn FilterTextInput(field: FilterField, criteria: Signal<FilterCriteria>, trigger_search: Callback<()>) -> Element {
    let mut criteria = criteria;
    let value = criteria.read().get(field).to_string();
    rsx! {
        input {
            r#type: "text",
            class: "filter-input",
            name: field.input_name(),
            placeholder: field.placeholder(),
            value: "{value}",
            oninput: move |event: Event<FormData>| {
                criteria.write().update(field, event.value());
            },
            onkeydown: move |event: Event<KeyboardData>| {
                if event.key() == Key::Enter {
                    trigger_search.call(());
                }
            },
        }
    }
}

#[component]
fn LanguageSelect(criteria: Signal<FilterCriteria>) -> Element {
    let mut criteria = criteria;
    let selected = criteria.read().language.clone();
    rsx! {
        select {
            class: "filter-select",
            name: FilterField::Language.input_name(),
            value: "{selected}",
            onchange: move |event: Event<FormData>| {
                criteria.write().update(FilterField::Language, event.value());
            },
            for (code, label) in SUPPORTED_LANGUAGES.iter() {
                option {
                    key: "{code}",
                    value: "{code}",
                    selected: *code == selected,
                    "{label}"
                }
            }
        }
    }
}
