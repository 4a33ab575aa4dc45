//! The application's features, one module per API.

pub mod hello;
pub mod info;
pub mod user;
