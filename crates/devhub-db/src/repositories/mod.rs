//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in devhub-core.

mod bookmark;
mod comment;
mod content;
mod error;
mod user;
mod vote;

pub use bookmark::PgBookmarkRepository;
pub use comment::PgCommentRepository;
pub use content::PgContentRepository;
pub use user::PgUserRepository;
pub use vote::PgVoteRepository;
