//! # devhub-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use services::{
    AuthService, BookmarkService, CommentService, ContentService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserService, VoteService,
};
