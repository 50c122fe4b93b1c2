//! Comment service

use devhub_core::entities::Comment;
use devhub_core::reputation::{ReputationAction, ReputationAward};
use devhub_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CommentResponse, CreateCommentRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Comment on any content item; the author earns a point
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        author_id: Snowflake,
        content_id: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        self.require_content(content_id).await?;

        let comment = Comment::new(self.ctx.generate_id(), content_id, author_id, &request.body)?;
        let award = ReputationAward::new(author_id, ReputationAction::Commented);
        self.ctx.comment_repo().create(&comment, award).await?;

        info!(comment_id = %comment.id, content_id = %content_id, "Comment created");
        Ok(CommentResponse::from(&comment))
    }

    /// Comments on an item, oldest first
    #[instrument(skip(self))]
    pub async fn list(&self, content_id: Snowflake) -> ServiceResult<Vec<CommentResponse>> {
        self.require_content(content_id).await?;
        let comments = self.ctx.comment_repo().find_by_content(content_id).await?;
        Ok(comments.iter().map(CommentResponse::from).collect())
    }

    /// Delete a comment the caller wrote
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: Snowflake, id: Snowflake) -> ServiceResult<()> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CommentNotFound(id))?;

        if !comment.is_authored_by(user_id) {
            return Err(DomainError::NotCommentAuthor.into());
        }

        self.ctx.comment_repo().delete(id).await?;
        info!(comment_id = %id, "Comment deleted");
        Ok(())
    }

    async fn require_content(&self, content_id: Snowflake) -> ServiceResult<()> {
        if self.ctx.content_repo().find_by_id(content_id).await?.is_none() {
            return Err(DomainError::ContentNotFound(content_id).into());
        }
        Ok(())
    }
}
