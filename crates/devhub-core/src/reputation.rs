//! Reputation rules
//!
//! Authors earn a fixed number of points when something they wrote is
//! persisted. Points are never taken away: deleting content or losing votes
//! leaves reputation untouched.

use crate::value_objects::{ContentKind, Snowflake};

/// Something a user did that may earn reputation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReputationAction {
    Published(ContentKind),
    Commented,
}

impl ReputationAction {
    /// Points earned for the action
    #[must_use]
    pub const fn points(self) -> i32 {
        match self {
            Self::Published(ContentKind::Post | ContentKind::Article | ContentKind::Question) => 2,
            Self::Published(ContentKind::Answer) => 4,
            Self::Published(ContentKind::Snippet) => 0,
            Self::Commented => 1,
        }
    }
}

/// Points to credit to a user in the same transaction as the write that earned them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReputationAward {
    pub user_id: Snowflake,
    pub points: i32,
}

impl ReputationAward {
    pub fn new(user_id: Snowflake, action: ReputationAction) -> Self {
        Self {
            user_id,
            points: action.points(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points == 0
    }
}
