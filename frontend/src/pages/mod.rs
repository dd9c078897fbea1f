pub mod page_not_found;
pub mod scheme_search_page;
