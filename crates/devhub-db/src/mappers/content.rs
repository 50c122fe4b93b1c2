//! Content item and comment entity <-> model mappers
//!
//! Kind columns are TEXT constrained by CHECKs, so a value that fails to
//! parse means the row was written outside this crate.

use devhub_core::entities::{Comment, ContentItem};
use devhub_core::error::DomainError;
use devhub_core::value_objects::Snowflake;

use crate::models::{CommentModel, ContentItemModel};

pub(crate) fn corrupt_row(e: impl std::fmt::Display) -> DomainError {
    DomainError::DatabaseError(format!("corrupt row: {e}"))
}

impl TryFrom<ContentItemModel> for ContentItem {
    type Error = DomainError;

    fn try_from(model: ContentItemModel) -> Result<Self, Self::Error> {
        Ok(ContentItem {
            id: Snowflake::new(model.id),
            kind: model.kind.parse().map_err(corrupt_row)?,
            author_id: Snowflake::new(model.author_id),
            parent_id: model.parent_id.map(Snowflake::new),
            title: model.title,
            body: model.body,
            language: model.language,
            tags: model.tags,
            image_urls: model.image_urls,
            links: model.links,
            upvote_count: model.upvote_count,
            downvote_count: model.downvote_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Map a batch of rows, failing on the first corrupt one
pub fn content_items(models: Vec<ContentItemModel>) -> Result<Vec<ContentItem>, DomainError> {
    models.into_iter().map(ContentItem::try_from).collect()
}

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            content_id: Snowflake::new(model.content_id),
            author_id: Snowflake::new(model.author_id),
            body: model.body,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
