//! Bookmark entity - a user's saved item

use chrono::{DateTime, Utc};

use crate::value_objects::{BookmarkKind, Snowflake};

/// Bookmark entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub user_id: Snowflake,
    pub item_id: Snowflake,
    pub item_kind: BookmarkKind,
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    pub fn new(user_id: Snowflake, item_id: Snowflake, item_kind: BookmarkKind) -> Self {
        Self {
            user_id,
            item_id,
            item_kind,
            created_at: Utc::now(),
        }
    }
}
