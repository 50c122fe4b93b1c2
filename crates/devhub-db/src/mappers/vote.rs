//! Vote and bookmark entity <-> model mappers

use devhub_core::entities::{Bookmark, Vote, VoteTally};
use devhub_core::error::DomainError;
use devhub_core::value_objects::Snowflake;

use super::content::corrupt_row;
use crate::models::{BookmarkModel, VoteCountModel, VoteModel};

impl TryFrom<VoteModel> for Vote {
    type Error = DomainError;

    fn try_from(model: VoteModel) -> Result<Self, Self::Error> {
        Ok(Vote {
            user_id: Snowflake::new(model.user_id),
            target_id: Snowflake::new(model.target_id),
            target_kind: model.target_kind.parse().map_err(corrupt_row)?,
            direction: model.direction.parse().map_err(corrupt_row)?,
            created_at: model.created_at,
        })
    }
}

impl TryFrom<BookmarkModel> for Bookmark {
    type Error = DomainError;

    fn try_from(model: BookmarkModel) -> Result<Self, Self::Error> {
        Ok(Bookmark {
            user_id: Snowflake::new(model.user_id),
            item_id: Snowflake::new(model.item_id),
            item_kind: model.item_kind.parse().map_err(corrupt_row)?,
            created_at: model.created_at,
        })
    }
}

impl From<VoteCountModel> for VoteTally {
    fn from(model: VoteCountModel) -> Self {
        VoteTally::new(model.upvotes, model.downvotes)
    }
}
