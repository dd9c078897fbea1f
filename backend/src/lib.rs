//! Search backend: predicate building, dataset access, translation and the
//! search pipeline that ties them together.

pub mod config;
pub mod error;
pub mod api;
pub mod db_utils;
pub mod translation;
pub mod server_extra;

#[cfg(test)]
mod test_server;
