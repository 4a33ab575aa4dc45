//! The greeting feature's core logic.

pub mod greeting_service;
