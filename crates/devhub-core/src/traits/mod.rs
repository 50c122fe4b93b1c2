//! Repository traits (ports)

mod repositories;

pub use repositories::{
    BookmarkRepository, CommentRepository, ContentQuery, ContentRepository, RepoResult,
    UserRepository, VoteRepository, MAX_PAGE_SIZE,
};
