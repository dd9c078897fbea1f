//! Plain axum routes mounted next to the UI's server functions.

pub mod search_endpoint;
pub use search_endpoint::{SEARCH_ENDPOINT_PATH, search_routes};
