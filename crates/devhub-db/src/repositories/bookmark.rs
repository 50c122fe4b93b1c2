//! PostgreSQL implementation of BookmarkRepository

use async_trait::async_trait;
use sqlx::error::ErrorKind;
use sqlx::PgPool;
use tracing::instrument;

use devhub_core::entities::Bookmark;
use devhub_core::error::DomainError;
use devhub_core::traits::{BookmarkRepository, RepoResult};
use devhub_core::value_objects::{BookmarkKind, Snowflake};

use crate::models::BookmarkModel;

use super::error::map_db_error;

/// PostgreSQL implementation of BookmarkRepository
#[derive(Clone)]
pub struct PgBookmarkRepository {
    pool: PgPool,
}

impl PgBookmarkRepository {
    /// Create a new PgBookmarkRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookmarkRepository for PgBookmarkRepository {
    #[instrument(skip(self))]
    async fn exists(
        &self,
        user_id: Snowflake,
        item_id: Snowflake,
        kind: BookmarkKind,
    ) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM bookmarks
                WHERE user_id = $1 AND item_id = $2 AND item_kind = $3
            )
            ",
        )
        .bind(user_id.into_inner())
        .bind(item_id.into_inner())
        .bind(kind.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, bookmark), fields(user_id = %bookmark.user_id, item_id = %bookmark.item_id))]
    async fn create(&self, bookmark: &Bookmark) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO bookmarks (user_id, item_id, item_kind, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(bookmark.user_id.into_inner())
        .bind(bookmark.item_id.into_inner())
        .bind(bookmark.item_kind.as_str())
        .bind(bookmark.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let kind = e.as_database_error().map(|db| db.kind());
            match kind {
                Some(ErrorKind::UniqueViolation) => DomainError::BookmarkAlreadyExists,
                Some(ErrorKind::ForeignKeyViolation) => {
                    DomainError::ContentNotFound(bookmark.item_id)
                }
                _ => map_db_error(e),
            }
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(
        &self,
        user_id: Snowflake,
        item_id: Snowflake,
        kind: BookmarkKind,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            "DELETE FROM bookmarks WHERE user_id = $1 AND item_id = $2 AND item_kind = $3",
        )
        .bind(user_id.into_inner())
        .bind(item_id.into_inner())
        .bind(kind.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::BookmarkNotFound);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_user(
        &self,
        user_id: Snowflake,
        kind: Option<BookmarkKind>,
    ) -> RepoResult<Vec<Bookmark>> {
        let results = sqlx::query_as::<_, BookmarkModel>(
            r"
            SELECT user_id, item_id, item_kind, created_at
            FROM bookmarks
            WHERE user_id = $1 AND ($2::TEXT IS NULL OR item_kind = $2)
            ORDER BY created_at DESC, item_id DESC
            ",
        )
        .bind(user_id.into_inner())
        .bind(kind.map(BookmarkKind::as_str))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Bookmark::try_from).collect()
    }
}
