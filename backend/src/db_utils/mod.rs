//! Access to the hosted schemes dataset.

pub mod postgrest_utils;
