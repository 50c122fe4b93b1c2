//! Database models - SQLx-compatible structs for PostgreSQL tables

mod content;
mod user;
mod vote;

pub use content::{CommentModel, ContentItemModel};
pub use user::UserModel;
pub use vote::{BookmarkModel, VoteCountModel, VoteModel};
