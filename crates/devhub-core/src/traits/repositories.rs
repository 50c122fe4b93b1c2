//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Writes that earn reputation take a
//! [`ReputationAward`] so the implementation can apply both in one
//! transaction.

use async_trait::async_trait;

use crate::entities::{Bookmark, Comment, ContentItem, User, Vote, VoteTally};
use crate::error::DomainError;
use crate::reputation::ReputationAward;
use crate::value_objects::{BookmarkKind, ContentKind, Snowflake, VoteDirection};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Check if username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Create a new user; accounts from external providers have no password
    async fn create(&self, user: &User, password_hash: Option<&str>) -> RepoResult<()>;

    /// Update profile fields (bio, interests, links, avatar)
    async fn update_profile(&self, user: &User) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;
}

// ============================================================================
// Content Repository
// ============================================================================

/// Largest page a client may request
pub const MAX_PAGE_SIZE: i64 = 100;

/// Filters and keyset pagination for content listings
///
/// `limit` may be one past [`MAX_PAGE_SIZE`] so callers can look ahead for
/// another page.
#[derive(Debug, Clone, Default)]
pub struct ContentQuery {
    pub kind: Option<ContentKind>,
    pub author_id: Option<Snowflake>,
    pub before: Option<Snowflake>,
    pub limit: i64,
}

#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Find content item by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<ContentItem>>;

    /// List top-level items, newest first
    async fn list(&self, query: ContentQuery) -> RepoResult<Vec<ContentItem>>;

    /// List answers to a question, oldest first
    async fn find_answers(&self, question_id: Snowflake) -> RepoResult<Vec<ContentItem>>;

    /// Insert an item and credit its author in one transaction
    async fn create(&self, item: &ContentItem, award: ReputationAward) -> RepoResult<()>;

    /// Delete an item together with its votes, bookmarks, comments, and answers
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Recompute the vote counters from the vote ledger and store them
    async fn recount(&self, id: Snowflake) -> RepoResult<VoteTally>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    /// List comments on a content item, oldest first
    async fn find_by_content(&self, content_id: Snowflake) -> RepoResult<Vec<Comment>>;

    /// Insert a comment and credit its author in one transaction
    async fn create(&self, comment: &Comment, award: ReputationAward) -> RepoResult<()>;

    /// Delete a comment
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Vote Repository
// ============================================================================

/// Vote ledger. Every write keeps the item's denormalized counters in step.
#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Find a user's vote on an item
    async fn find(&self, user_id: Snowflake, target_id: Snowflake) -> RepoResult<Option<Vote>>;

    /// Record a vote; `VoteAlreadyExists` if the user already voted on the item
    async fn create(&self, vote: &Vote) -> RepoResult<()>;

    /// Remove a vote and return it; `VoteNotFound` if there is none
    async fn delete(&self, user_id: Snowflake, target_id: Snowflake) -> RepoResult<Vote>;

    /// Replace an existing vote with one in the given direction
    async fn switch(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        direction: VoteDirection,
    ) -> RepoResult<Vote>;

    /// Current counters for an item
    async fn tally(&self, target_id: Snowflake) -> RepoResult<VoteTally>;
}

// ============================================================================
// Bookmark Repository
// ============================================================================

#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// Check whether the user bookmarked the item as `kind`
    async fn exists(
        &self,
        user_id: Snowflake,
        item_id: Snowflake,
        kind: BookmarkKind,
    ) -> RepoResult<bool>;

    /// Save a bookmark; `BookmarkAlreadyExists` on a duplicate
    async fn create(&self, bookmark: &Bookmark) -> RepoResult<()>;

    /// Remove a bookmark of `kind`; `BookmarkNotFound` if there is none
    async fn delete(
        &self,
        user_id: Snowflake,
        item_id: Snowflake,
        kind: BookmarkKind,
    ) -> RepoResult<()>;

    /// The user's bookmarks, newest first
    async fn find_by_user(
        &self,
        user_id: Snowflake,
        kind: Option<BookmarkKind>,
    ) -> RepoResult<Vec<Bookmark>>;
}
