//! Domain entities - core business objects

mod bookmark;
mod comment;
mod content;
mod user;
mod vote;

pub use bookmark::Bookmark;
pub use comment::Comment;
pub use content::{ContentItem, NewContent};
pub use user::User;
pub use vote::{Vote, VoteTally};
