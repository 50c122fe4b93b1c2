//! Service context - dependency container for services
//!
//! Holds all repositories, the session store, and the id generator needed by
//! services. Built once at startup and shared through the API state.

use std::sync::Arc;

use devhub_cache::{RedisPool, SessionStore};
use devhub_core::traits::{
    BookmarkRepository, CommentRepository, ContentRepository, UserRepository, VoteRepository,
};
use devhub_core::{Snowflake, SnowflakeGenerator};
use devhub_db::{
    PgBookmarkRepository, PgCommentRepository, PgContentRepository, PgPool, PgUserRepository,
    PgVoteRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Repositories are trait objects so services can run against PostgreSQL in
/// production and against in-memory fakes in tests.
#[derive(Clone)]
pub struct ServiceContext {
    // Redis pool
    redis_pool: RedisPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    content_repo: Arc<dyn ContentRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    vote_repo: Arc<dyn VoteRepository>,
    bookmark_repo: Arc<dyn BookmarkRepository>,

    // Cache stores
    session_store: SessionStore,

    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        redis_pool: RedisPool,
        user_repo: Arc<dyn UserRepository>,
        content_repo: Arc<dyn ContentRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        vote_repo: Arc<dyn VoteRepository>,
        bookmark_repo: Arc<dyn BookmarkRepository>,
        session_ttl_seconds: u64,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        let session_store = SessionStore::with_ttl(redis_pool.clone(), session_ttl_seconds);

        Self {
            redis_pool,
            user_repo,
            content_repo,
            comment_repo,
            vote_repo,
            bookmark_repo,
            session_store,
            snowflake_generator,
        }
    }

    /// Wire every repository to PostgreSQL
    pub fn postgres(
        pool: PgPool,
        redis_pool: RedisPool,
        session_ttl_seconds: u64,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self::new(
            redis_pool,
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgContentRepository::new(pool.clone())),
            Arc::new(PgCommentRepository::new(pool.clone())),
            Arc::new(PgVoteRepository::new(pool.clone())),
            Arc::new(PgBookmarkRepository::new(pool)),
            session_ttl_seconds,
            snowflake_generator,
        )
    }

    /// Get the Redis connection pool
    pub fn redis_pool(&self) -> &RedisPool {
        &self.redis_pool
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn content_repo(&self) -> &dyn ContentRepository {
        self.content_repo.as_ref()
    }

    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    pub fn vote_repo(&self) -> &dyn VoteRepository {
        self.vote_repo.as_ref()
    }

    pub fn bookmark_repo(&self) -> &dyn BookmarkRepository {
        self.bookmark_repo.as_ref()
    }

    // === Cache Stores ===

    /// Get the login session store
    pub fn session_store(&self) -> &SessionStore {
        &self.session_store
    }

    // === Utilities ===

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("redis_pool", &self.redis_pool)
            .field("session_ttl_seconds", &self.session_store.ttl_seconds())
            .field("worker_id", &self.snowflake_generator.worker_id())
            .finish_non_exhaustive()
    }
}

/// Builder for ServiceContext
pub struct ServiceContextBuilder {
    redis_pool: Option<RedisPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    content_repo: Option<Arc<dyn ContentRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    vote_repo: Option<Arc<dyn VoteRepository>>,
    bookmark_repo: Option<Arc<dyn BookmarkRepository>>,
    session_ttl_seconds: Option<u64>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            redis_pool: None,
            user_repo: None,
            content_repo: None,
            comment_repo: None,
            vote_repo: None,
            bookmark_repo: None,
            session_ttl_seconds: None,
            snowflake_generator: None,
        }
    }

    pub fn redis_pool(mut self, pool: RedisPool) -> Self {
        self.redis_pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn content_repo(mut self, repo: Arc<dyn ContentRepository>) -> Self {
        self.content_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn vote_repo(mut self, repo: Arc<dyn VoteRepository>) -> Self {
        self.vote_repo = Some(repo);
        self
    }

    pub fn bookmark_repo(mut self, repo: Arc<dyn BookmarkRepository>) -> Self {
        self.bookmark_repo = Some(repo);
        self
    }

    pub fn session_ttl_seconds(mut self, ttl: u64) -> Self {
        self.session_ttl_seconds = Some(ttl);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.redis_pool.ok_or_else(|| ServiceError::validation("redis_pool is required"))?,
            self.user_repo.ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.content_repo.ok_or_else(|| ServiceError::validation("content_repo is required"))?,
            self.comment_repo.ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            self.vote_repo.ok_or_else(|| ServiceError::validation("vote_repo is required"))?,
            self.bookmark_repo.ok_or_else(|| ServiceError::validation("bookmark_repo is required"))?,
            self.session_ttl_seconds.unwrap_or(7 * 24 * 60 * 60),
            self.snowflake_generator.unwrap_or_default(),
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
