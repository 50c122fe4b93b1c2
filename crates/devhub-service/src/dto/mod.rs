//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    BookmarkRequest, CreateAnswerRequest, CreateCommentRequest, CreateContentRequest,
    ListBookmarksQuery, ListContentQuery, LoginRequest, RegisterRequest, UpdateProfileRequest,
    VoteRequest,
};

pub use responses::{
    AuthResponse, AuthorSummary, BookmarkCheckResponse, BookmarkResponse, CommentResponse,
    ContentResponse, CurrentUserResponse, HealthChecks, HealthResponse, PageResponse,
    PaginationMeta, PublicUserResponse, ReadinessResponse, TallyResponse, ToggleVoteResponse,
    VoteCheckResponse, VoteResponse,
};

pub use mappers::ContentWithAuthor;
