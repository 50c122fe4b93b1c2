//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

use devhub_core::{BookmarkKind, ContentKind, VoteDirection, VoteTargetKind};

// ============================================================================
// Common Response Types
// ============================================================================

/// One page of a keyset-paginated listing
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PageResponse<T> {
    pub fn new(items: Vec<T>, before: Option<String>, has_more: bool, limit: i64) -> Self {
        Self {
            items,
            pagination: PaginationMeta {
                before,
                has_more,
                limit,
            },
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    /// Cursor for fetching the next (older) page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    /// Whether more results exist
    pub has_more: bool,
    /// Page size limit used
    pub limit: i64,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Successful login or registration
///
/// The token is also set as the session cookie; it is returned here for
/// clients that send it as a Bearer header.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(token: String, expires_in: u64, user: CurrentUserResponse) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Current authenticated user (includes email)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub interests: Vec<String>,
    pub links: Vec<String>,
    pub reputation_points: i32,
    pub created_at: DateTime<Utc>,
}

/// Public profile, as seen by anyone
#[derive(Debug, Clone, Serialize)]
pub struct PublicUserResponse {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub interests: Vec<String>,
    pub links: Vec<String>,
    pub reputation_points: i32,
    pub created_at: DateTime<Utc>,
}

/// Author shown next to content
#[derive(Debug, Clone, Serialize)]
pub struct AuthorSummary {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub reputation_points: i32,
}

// ============================================================================
// Content Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ContentResponse {
    pub id: String,
    pub kind: ContentKind,
    pub author_id: String,
    /// Missing when the author could not be loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub tags: Vec<String>,
    pub image_urls: Vec<String>,
    pub links: Vec<String>,
    pub upvotes: i64,
    pub downvotes: i64,
    pub score: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub content_id: String,
    pub author_id: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Vote Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct VoteResponse {
    pub user_id: String,
    pub target_id: String,
    pub voteable_type: VoteTargetKind,
    pub vote_type: VoteDirection,
    pub created_at: DateTime<Utc>,
}

/// The caller's current vote on an item
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VoteCheckResponse {
    pub vote_type: Option<VoteDirection>,
}

/// Up/down counts of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TallyResponse {
    pub upvotes: i64,
    pub downvotes: i64,
    pub score: i64,
}

/// Outcome of a toggle: the caller's new state and the item's counts
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ToggleVoteResponse {
    pub vote_type: Option<VoteDirection>,
    pub upvotes: i64,
    pub downvotes: i64,
}

// ============================================================================
// Bookmark Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkResponse {
    pub item_id: String,
    pub item_type: BookmarkKind,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkCheckResponse {
    pub is_bookmarked: bool,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing store
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let all_healthy = database_healthy && redis_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                redis: if redis_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
