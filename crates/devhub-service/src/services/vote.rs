//! Vote service
//!
//! Each (user, item) pair is either unvoted or voted in one direction:
//!
//! ```text
//! NoVote   --add(d)-->      Voted(d)
//! Voted(d) --remove-->      NoVote
//! Voted(d) --add(any)-->    Conflict
//! Voted(d) --toggle(d)-->   NoVote
//! Voted(d) --toggle(e)-->   Voted(e)
//! ```
//!
//! The ledger and the item's counters move together in the repository, so
//! the counts returned here are read straight from the item.

use devhub_core::entities::{ContentItem, Vote};
use devhub_core::{DomainError, Snowflake, VoteDirection, VoteTargetKind};
use tracing::{debug, info, instrument};

use crate::dto::{TallyResponse, ToggleVoteResponse, VoteCheckResponse, VoteRequest, VoteResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Vote service
pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    /// Create a new VoteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Parse a vote body whose `voteable_type` must name the route's kind
    pub fn parse_for_kind(
        kind: VoteTargetKind,
        request: &VoteRequest,
    ) -> ServiceResult<VoteDirection> {
        let (voteable, direction) = Self::parse(request)?;
        if voteable != kind {
            return Err(ServiceError::validation(format!(
                "voteable_type '{voteable}' does not match a {kind} vote"
            )));
        }
        Ok(direction)
    }

    /// Parse `voteable_type` and `vote_type` of a vote body
    pub fn parse(request: &VoteRequest) -> ServiceResult<(VoteTargetKind, VoteDirection)> {
        let kind = request
            .voteable_type
            .parse::<VoteTargetKind>()
            .map_err(|e| ServiceError::validation(e.to_string()))?;
        let direction = request
            .vote_type
            .parse::<VoteDirection>()
            .map_err(|e| ServiceError::validation(e.to_string()))?;
        Ok((kind, direction))
    }

    /// Cast a vote; fails if the caller already voted on the item
    #[instrument(skip(self))]
    pub async fn add(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        kind: VoteTargetKind,
        direction: VoteDirection,
    ) -> ServiceResult<VoteResponse> {
        self.require_target(target_id, kind).await?;

        let vote = Vote::new(user_id, target_id, kind, direction);
        self.ctx.vote_repo().create(&vote).await?;

        info!(
            user_id = %user_id,
            target_id = %target_id,
            direction = %direction,
            "Vote added"
        );
        Ok(VoteResponse::from(&vote))
    }

    /// Withdraw the caller's vote on an item of the given kind
    #[instrument(skip(self))]
    pub async fn remove(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        kind: VoteTargetKind,
    ) -> ServiceResult<()> {
        let existing = self.ctx.vote_repo().find(user_id, target_id).await?;
        if !existing.is_some_and(|vote| vote.target_kind == kind) {
            return Err(DomainError::VoteNotFound.into());
        }

        let vote = self.ctx.vote_repo().delete(user_id, target_id).await?;

        info!(
            user_id = %user_id,
            target_id = %target_id,
            direction = %vote.direction,
            "Vote removed"
        );
        Ok(())
    }

    /// The caller's current direction on an item, if any
    #[instrument(skip(self))]
    pub async fn check(&self, user_id: Snowflake, target_id: Snowflake) -> ServiceResult<VoteCheckResponse> {
        let vote = self.ctx.vote_repo().find(user_id, target_id).await?;
        Ok(VoteCheckResponse {
            vote_type: vote.map(|v| v.direction),
        })
    }

    /// Run the vote state machine for one click on an up or down button
    #[instrument(skip(self))]
    pub async fn toggle(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        kind: VoteTargetKind,
        direction: VoteDirection,
    ) -> ServiceResult<ToggleVoteResponse> {
        self.require_target(target_id, kind).await?;

        let state = match self.ctx.vote_repo().find(user_id, target_id).await? {
            None => {
                let vote = Vote::new(user_id, target_id, kind, direction);
                self.ctx.vote_repo().create(&vote).await?;
                Some(direction)
            }
            Some(current) if current.direction == direction => {
                self.ctx.vote_repo().delete(user_id, target_id).await?;
                None
            }
            Some(_) => {
                self.ctx
                    .vote_repo()
                    .switch(user_id, target_id, direction)
                    .await?;
                Some(direction)
            }
        };

        let tally = self.ctx.vote_repo().tally(target_id).await?;
        debug!(
            user_id = %user_id,
            target_id = %target_id,
            state = ?state,
            upvotes = tally.upvotes,
            downvotes = tally.downvotes,
            "Vote toggled"
        );

        Ok(ToggleVoteResponse {
            vote_type: state,
            upvotes: tally.upvotes,
            downvotes: tally.downvotes,
        })
    }

    /// Up/down counts of an item
    #[instrument(skip(self))]
    pub async fn tally(&self, target_id: Snowflake) -> ServiceResult<TallyResponse> {
        let tally = self.ctx.vote_repo().tally(target_id).await?;
        Ok(TallyResponse::from(tally))
    }

    /// Rebuild an item's counters from the vote ledger
    #[instrument(skip(self))]
    pub async fn recount(&self, target_id: Snowflake) -> ServiceResult<TallyResponse> {
        let tally = self.ctx.content_repo().recount(target_id).await?;
        info!(
            target_id = %target_id,
            upvotes = tally.upvotes,
            downvotes = tally.downvotes,
            "Vote counters recounted"
        );
        Ok(TallyResponse::from(tally))
    }

    /// The target must exist and be of the kind being voted on
    async fn require_target(
        &self,
        target_id: Snowflake,
        kind: VoteTargetKind,
    ) -> ServiceResult<ContentItem> {
        self.ctx
            .content_repo()
            .find_by_id(target_id)
            .await?
            .filter(|item| item.kind == kind.content_kind())
            .ok_or_else(|| DomainError::ContentNotFound(target_id).into())
    }
}
