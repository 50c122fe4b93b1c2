//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and path ids.

mod auth;
mod path;
mod validated;

pub use auth::{session_token, AuthUser};
pub use path::SnowflakePath;
pub use validated::{ValidatedJson, ValidatedQuery};
