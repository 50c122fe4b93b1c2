//! # devhub-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! reputation rules. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod reputation;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Bookmark, Comment, ContentItem, NewContent, User, Vote, VoteTally};
pub use error::DomainError;
pub use reputation::{ReputationAction, ReputationAward};
pub use traits::{
    BookmarkRepository, CommentRepository, ContentQuery, ContentRepository, RepoResult,
    UserRepository, VoteRepository,
};
pub use value_objects::{
    BookmarkKind, ContentKind, KindParseError, Snowflake, SnowflakeGenerator,
    SnowflakeParseError, VoteDirection, VoteTargetKind,
};
