//! A greeting web service with axum.
//!
//! Exposes a static greeting, a personal greeting, and a built-in user
//! over a small REST API. See [`app`] for the routes and for examples.

pub mod app;
pub mod core;
pub mod feature;
pub mod infra;
