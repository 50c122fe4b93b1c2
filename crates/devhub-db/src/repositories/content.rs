//! PostgreSQL implementation of ContentRepository

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::{debug, instrument};

use devhub_core::entities::{ContentItem, VoteTally};
use devhub_core::error::DomainError;
use devhub_core::reputation::ReputationAward;
use devhub_core::traits::{ContentQuery, ContentRepository, RepoResult, MAX_PAGE_SIZE};
use devhub_core::value_objects::Snowflake;

use crate::mappers::content_items;
use crate::models::{ContentItemModel, VoteCountModel};

use super::error::{map_db_error, map_foreign_key_violation};

const CONTENT_COLUMNS: &str = "id, kind, author_id, parent_id, title, body, language, tags, \
                               image_urls, links, upvote_count, downvote_count, created_at, updated_at";

/// PostgreSQL implementation of ContentRepository
#[derive(Clone)]
pub struct PgContentRepository {
    pool: PgPool,
}

impl PgContentRepository {
    /// Create a new PgContentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Credit reputation inside the caller's transaction
pub(crate) async fn apply_award(conn: &mut PgConnection, award: ReputationAward) -> RepoResult<()> {
    if award.is_empty() {
        return Ok(());
    }

    let result = sqlx::query(
        r"
        UPDATE users
        SET reputation_points = reputation_points + $2
        WHERE id = $1
        ",
    )
    .bind(award.user_id.into_inner())
    .bind(award.points)
    .execute(conn)
    .await
    .map_err(map_db_error)?;

    if result.rows_affected() == 0 {
        return Err(DomainError::UserNotFound(award.user_id));
    }

    debug!(user_id = %award.user_id, points = award.points, "Reputation awarded");
    Ok(())
}

#[async_trait]
impl ContentRepository for PgContentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<ContentItem>> {
        let sql = format!("SELECT {CONTENT_COLUMNS} FROM content_items WHERE id = $1");
        let result = sqlx::query_as::<_, ContentItemModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(ContentItem::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, query: ContentQuery) -> RepoResult<Vec<ContentItem>> {
        let limit = query.limit.clamp(1, MAX_PAGE_SIZE + 1);

        // NULL parameters disable their filter; answers only show up when asked for
        let sql = format!(
            r"
            SELECT {CONTENT_COLUMNS}
            FROM content_items
            WHERE (($1::TEXT IS NULL AND kind <> 'answer') OR kind = $1)
              AND ($2::BIGINT IS NULL OR author_id = $2)
              AND ($3::BIGINT IS NULL OR id < $3)
            ORDER BY id DESC
            LIMIT $4
            "
        );
        let results = sqlx::query_as::<_, ContentItemModel>(&sql)
            .bind(query.kind.map(|k| k.as_str()))
            .bind(query.author_id.map(Snowflake::into_inner))
            .bind(query.before.map(Snowflake::into_inner))
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        content_items(results)
    }

    #[instrument(skip(self))]
    async fn find_answers(&self, question_id: Snowflake) -> RepoResult<Vec<ContentItem>> {
        let sql = format!(
            "SELECT {CONTENT_COLUMNS} FROM content_items WHERE parent_id = $1 ORDER BY id"
        );
        let results = sqlx::query_as::<_, ContentItemModel>(&sql)
            .bind(question_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        content_items(results)
    }

    #[instrument(skip(self, item), fields(content_id = %item.id, kind = %item.kind))]
    async fn create(&self, item: &ContentItem, award: ReputationAward) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO content_items (id, kind, author_id, parent_id, title, body, language,
                                       tags, image_urls, links, upvote_count, downvote_count,
                                       created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ",
        )
        .bind(item.id.into_inner())
        .bind(item.kind.as_str())
        .bind(item.author_id.into_inner())
        .bind(item.parent_id.map(Snowflake::into_inner))
        .bind(&item.title)
        .bind(&item.body)
        .bind(&item.language)
        .bind(&item.tags)
        .bind(&item.image_urls)
        .bind(&item.links)
        .bind(item.upvote_count)
        .bind(item.downvote_count)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, || match item.parent_id {
                Some(parent) => DomainError::ContentNotFound(parent),
                None => DomainError::UserNotFound(item.author_id),
            })
        })?;

        apply_award(&mut *tx, award).await?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        // Answers, comments, votes, and bookmarks go with it via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM content_items WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ContentNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn recount(&self, id: Snowflake) -> RepoResult<VoteTally> {
        let result = sqlx::query_as::<_, VoteCountModel>(
            r"
            WITH counted AS (
                SELECT COUNT(*) FILTER (WHERE direction = 'upvote')   AS upvotes,
                       COUNT(*) FILTER (WHERE direction = 'downvote') AS downvotes
                FROM votes
                WHERE target_id = $1
            )
            UPDATE content_items AS c
            SET upvote_count = counted.upvotes, downvote_count = counted.downvotes
            FROM counted
            WHERE c.id = $1
            RETURNING c.upvote_count::BIGINT AS upvotes, c.downvote_count::BIGINT AS downvotes
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result
            .map(VoteTally::from)
            .ok_or(DomainError::ContentNotFound(id))
    }
}
