//! Vote entity and the up/down aggregate

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::{Snowflake, VoteDirection, VoteTargetKind};

/// One user's vote on one content item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub user_id: Snowflake,
    pub target_id: Snowflake,
    pub target_kind: VoteTargetKind,
    pub direction: VoteDirection,
    pub created_at: DateTime<Utc>,
}

impl Vote {
    pub fn new(
        user_id: Snowflake,
        target_id: Snowflake,
        target_kind: VoteTargetKind,
        direction: VoteDirection,
    ) -> Self {
        Self {
            user_id,
            target_id,
            target_kind,
            direction,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_upvote(&self) -> bool {
        self.direction == VoteDirection::Upvote
    }
}

/// Up/down counts for one content item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VoteTally {
    pub upvotes: i64,
    pub downvotes: i64,
}

impl VoteTally {
    pub fn new(upvotes: i64, downvotes: i64) -> Self {
        Self { upvotes, downvotes }
    }

    /// Count votes by direction
    pub fn from_votes<'a>(votes: impl IntoIterator<Item = &'a Vote>) -> Self {
        votes.into_iter().fold(Self::default(), |mut tally, vote| {
            tally.record(vote.direction);
            tally
        })
    }

    pub fn record(&mut self, direction: VoteDirection) {
        match direction {
            VoteDirection::Upvote => self.upvotes += 1,
            VoteDirection::Downvote => self.downvotes += 1,
        }
    }

    /// Undo a recorded vote; counts never go below zero
    pub fn retract(&mut self, direction: VoteDirection) {
        match direction {
            VoteDirection::Upvote => self.upvotes = (self.upvotes - 1).max(0),
            VoteDirection::Downvote => self.downvotes = (self.downvotes - 1).max(0),
        }
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.upvotes - self.downvotes
    }
}
