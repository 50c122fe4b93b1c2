//! Comment entity - a reply attached to exactly one content item

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

pub const MAX_COMMENT_LENGTH: usize = 2_000;

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub content_id: Snowflake,
    pub author_id: Snowflake,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Create a comment with a trimmed, length-checked body
    pub fn new(
        id: Snowflake,
        content_id: Snowflake,
        author_id: Snowflake,
        body: &str,
    ) -> Result<Self, DomainError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(DomainError::ValidationError(
                "Comment cannot be empty".to_string(),
            ));
        }
        if body.chars().count() > MAX_COMMENT_LENGTH {
            return Err(DomainError::ContentTooLong {
                max: MAX_COMMENT_LENGTH,
            });
        }

        let now = Utc::now();
        Ok(Self {
            id,
            content_id,
            author_id,
            body: body.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    #[inline]
    pub fn is_authored_by(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }
}
