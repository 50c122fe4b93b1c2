//! PostgreSQL implementation of VoteRepository
//!
//! Every ledger write also moves the matching counter on `content_items`
//! inside the same transaction.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::error::ErrorKind;
use sqlx::{PgConnection, PgPool};
use tracing::{debug, instrument};

use devhub_core::entities::{Vote, VoteTally};
use devhub_core::error::DomainError;
use devhub_core::traits::{RepoResult, VoteRepository};
use devhub_core::value_objects::{Snowflake, VoteDirection};

use crate::models::{VoteCountModel, VoteModel};

use super::error::map_db_error;

/// PostgreSQL implementation of VoteRepository
#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    /// Create a new PgVoteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn counter_column(direction: VoteDirection) -> &'static str {
    match direction {
        VoteDirection::Upvote => "upvote_count",
        VoteDirection::Downvote => "downvote_count",
    }
}

async fn bump_counter(
    conn: &mut PgConnection,
    target_id: Snowflake,
    direction: VoteDirection,
    delta: i32,
) -> RepoResult<()> {
    let column = counter_column(direction);
    let sql = format!(
        "UPDATE content_items SET {column} = GREATEST({column} + $2, 0) WHERE id = $1"
    );
    let result = sqlx::query(&sql)
        .bind(target_id.into_inner())
        .bind(delta)
        .execute(conn)
        .await
        .map_err(map_db_error)?;

    if result.rows_affected() == 0 {
        return Err(DomainError::ContentNotFound(target_id));
    }
    Ok(())
}

async fn delete_row(
    conn: &mut PgConnection,
    user_id: Snowflake,
    target_id: Snowflake,
) -> RepoResult<Vote> {
    let deleted = sqlx::query_as::<_, VoteModel>(
        r"
        DELETE FROM votes
        WHERE user_id = $1 AND target_id = $2
        RETURNING user_id, target_id, target_kind, direction, created_at
        ",
    )
    .bind(user_id.into_inner())
    .bind(target_id.into_inner())
    .fetch_optional(&mut *conn)
    .await
    .map_err(map_db_error)?
    .ok_or(DomainError::VoteNotFound)?;

    let vote = Vote::try_from(deleted)?;
    bump_counter(conn, target_id, vote.direction, -1).await?;
    Ok(vote)
}

async fn insert_row(conn: &mut PgConnection, vote: &Vote) -> RepoResult<()> {
    sqlx::query(
        r"
        INSERT INTO votes (user_id, target_id, target_kind, direction, created_at)
        VALUES ($1, $2, $3, $4, $5)
        ",
    )
    .bind(vote.user_id.into_inner())
    .bind(vote.target_id.into_inner())
    .bind(vote.target_kind.as_str())
    .bind(vote.direction.as_str())
    .bind(vote.created_at)
    .execute(&mut *conn)
    .await
    .map_err(|e| {
        let kind = e.as_database_error().map(|db| db.kind());
        match kind {
            Some(ErrorKind::UniqueViolation) => DomainError::VoteAlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => DomainError::ContentNotFound(vote.target_id),
            _ => map_db_error(e),
        }
    })?;

    bump_counter(conn, vote.target_id, vote.direction, 1).await
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: Snowflake, target_id: Snowflake) -> RepoResult<Option<Vote>> {
        let result = sqlx::query_as::<_, VoteModel>(
            r"
            SELECT user_id, target_id, target_kind, direction, created_at
            FROM votes
            WHERE user_id = $1 AND target_id = $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(target_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Vote::try_from).transpose()
    }

    #[instrument(skip(self, vote), fields(user_id = %vote.user_id, target_id = %vote.target_id))]
    async fn create(&self, vote: &Vote) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        insert_row(&mut *tx, vote).await?;
        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: Snowflake, target_id: Snowflake) -> RepoResult<Vote> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        let vote = delete_row(&mut *tx, user_id, target_id).await?;
        tx.commit().await.map_err(map_db_error)?;
        Ok(vote)
    }

    #[instrument(skip(self))]
    async fn switch(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        direction: VoteDirection,
    ) -> RepoResult<Vote> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let old = delete_row(&mut *tx, user_id, target_id).await?;
        let previous = old.direction;
        let vote = Vote {
            direction,
            created_at: Utc::now(),
            ..old
        };
        insert_row(&mut *tx, &vote).await?;

        tx.commit().await.map_err(map_db_error)?;
        debug!(from = %previous, to = %direction, "Vote switched");
        Ok(vote)
    }

    #[instrument(skip(self))]
    async fn tally(&self, target_id: Snowflake) -> RepoResult<VoteTally> {
        let result = sqlx::query_as::<_, VoteCountModel>(
            r"
            SELECT upvote_count::BIGINT AS upvotes, downvote_count::BIGINT AS downvotes
            FROM content_items
            WHERE id = $1
            ",
        )
        .bind(target_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result
            .map(VoteTally::from)
            .ok_or(DomainError::ContentNotFound(target_id))
    }
}
