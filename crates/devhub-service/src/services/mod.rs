//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod bookmark;
pub mod comment;
pub mod content;
pub mod context;
pub mod error;
pub mod user;
pub mod vote;

// Re-export all services for convenience
pub use auth::AuthService;
pub use bookmark::BookmarkService;
pub use comment::CommentService;
pub use content::ContentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use user::UserService;
pub use vote::VoteService;

use devhub_core::Snowflake;

/// Parse a client-supplied id, naming the field in the error
pub(crate) fn parse_id(field: &str, raw: &str) -> ServiceResult<Snowflake> {
    Snowflake::parse(raw).map_err(|_| ServiceError::validation(format!("Invalid {field}: {raw}")))
}
