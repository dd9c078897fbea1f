use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::page_not_found::PageNotFound;
use crate::pages::scheme_search_page::SchemeSearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    SchemeSearchPage {},


    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },

}
