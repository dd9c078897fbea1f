//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod search_const;
pub mod filter_criteria;
pub mod predicate;
pub mod scheme_record;
pub mod search_error;
pub mod search_state;
pub mod scheme_view;
