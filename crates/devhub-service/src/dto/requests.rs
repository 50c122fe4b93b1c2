//! Request DTOs for API endpoints
//!
//! All body DTOs implement `Deserialize` and `Validate` for input validation.
//! Kinds and ids arrive as strings and are parsed by the services, so a bad
//! value becomes a 400 with a readable message instead of a body rejection.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use devhub_core::NewContent;

fn validate_username(username: &str) -> Result<(), ValidationError> {
    let ok = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if ok {
        Ok(())
    } else {
        Err(ValidationError::new("username_charset")
            .with_message("Username may only contain letters, digits, '_' and '-'".into()))
    }
}

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        length(min = 3, max = 32, message = "Username must be 3-32 characters"),
        custom(function = "validate_username")
    )]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Partial profile update; absent fields are left alone
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<String>,

    #[validate(length(max = 20, message = "At most 20 interests"))]
    pub interests: Option<Vec<String>>,

    #[validate(length(max = 10, message = "At most 10 links"))]
    pub links: Option<Vec<String>>,

    #[validate(url(message = "Avatar must be a valid URL"))]
    pub avatar_url: Option<String>,
}

// ============================================================================
// Content Requests
// ============================================================================

/// Create a post, question, article, or snippet
///
/// Which fields are required depends on the kind; the entity enforces it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateContentRequest {
    #[validate(length(min = 1, max = 300, message = "Title must be 1-300 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 40000, message = "Body must be 1-40000 characters"))]
    pub body: String,

    /// Snippet language, e.g. `rust`
    #[validate(length(min = 1, max = 32, message = "Language must be 1-32 characters"))]
    pub language: Option<String>,

    #[serde(default)]
    #[validate(length(max = 10, message = "At most 10 tags"))]
    pub tags: Vec<String>,

    #[serde(default)]
    #[validate(length(max = 10, message = "At most 10 images"))]
    pub image_urls: Vec<String>,

    #[serde(default)]
    #[validate(length(max = 10, message = "At most 10 links"))]
    pub links: Vec<String>,
}

impl From<CreateContentRequest> for NewContent {
    fn from(request: CreateContentRequest) -> Self {
        Self {
            title: request.title,
            body: request.body,
            language: request.language,
            tags: request.tags,
            image_urls: request.image_urls,
            links: request.links,
        }
    }
}

/// Answer a question
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAnswerRequest {
    #[validate(length(min = 1, max = 40000, message = "Body must be 1-40000 characters"))]
    pub body: String,

    #[serde(default)]
    #[validate(length(max = 10, message = "At most 10 links"))]
    pub links: Vec<String>,
}

/// Query string for content listings
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ListContentQuery {
    pub kind: Option<String>,

    /// Only items by this author
    pub author_id: Option<String>,

    /// Keyset cursor: only items with a smaller id
    pub before: Option<String>,

    #[validate(range(min = 1, max = 100, message = "Limit must be 1-100"))]
    pub limit: Option<i64>,
}

// ============================================================================
// Comment Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub body: String,
}

// ============================================================================
// Vote Requests
// ============================================================================

/// Body of the add and toggle vote endpoints
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VoteRequest {
    /// `upvote` or `downvote`
    #[validate(length(min = 1, message = "vote_type is required"))]
    pub vote_type: String,

    /// Kind of the item being voted on; must agree with the route
    #[validate(length(min = 1, message = "voteable_type is required"))]
    pub voteable_type: String,
}

// ============================================================================
// Bookmark Requests
// ============================================================================

/// Body of the add and remove bookmark endpoints, also the check query
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkRequest {
    #[validate(length(min = 1, message = "itemId is required"))]
    pub item_id: String,

    #[validate(length(min = 1, message = "itemType is required"))]
    pub item_type: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBookmarksQuery {
    pub item_type: Option<String>,
}
