//! Vote and bookmark database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for votes table
#[derive(Debug, Clone, FromRow)]
pub struct VoteModel {
    pub user_id: i64,
    pub target_id: i64,
    pub target_kind: String,
    pub direction: String,
    pub created_at: DateTime<Utc>,
}

/// Counter pair read from content_items or computed from votes
#[derive(Debug, Clone, Copy, FromRow)]
pub struct VoteCountModel {
    pub upvotes: i64,
    pub downvotes: i64,
}

/// Database model for bookmarks table
#[derive(Debug, Clone, FromRow)]
pub struct BookmarkModel {
    pub user_id: i64,
    pub item_id: i64,
    pub item_kind: String,
    pub created_at: DateTime<Utc>,
}
