//! Integration test utilities for the DevHub API
//!
//! Helpers for running end-to-end tests against a real server backed by
//! PostgreSQL and Redis.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
