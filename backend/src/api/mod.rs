//! Backend API callable from server functions and HTTP routes.

pub mod search;
