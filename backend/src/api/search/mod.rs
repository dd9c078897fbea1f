//! Scheme search: predicate building and the search pipeline.

pub mod search_predicates;
pub use search_predicates::build_predicates;

mod search_schemes;
pub use search_schemes::{SchemeSearchService, install_search_service, search_schemes, search_service};
