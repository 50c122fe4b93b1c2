//! Test fixtures and data generators
//!
//! Request bodies and the slices of response bodies the tests read.

use serde::{Deserialize, Serialize};

/// Short unique suffix; test data outlives a single run
pub fn unique_suffix() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..12].to_string()
}

/// `{success, message, data}` response envelope
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("dev_{suffix}"),
            email: format!("dev_{suffix}@example.com"),
            password: "TestPass123".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AuthData {
    pub token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub user: UserData,
}

#[derive(Debug, Deserialize)]
pub struct UserData {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    pub reputation_points: i32,
}

/// Body of the post, question, article, and snippet endpoints
#[derive(Debug, Default, Serialize)]
pub struct ContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub tags: Vec<String>,
}

impl ContentRequest {
    pub fn titled(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            body: format!("Body of {title}"),
            ..Default::default()
        }
    }

    pub fn snippet() -> Self {
        Self {
            title: Some("Swap".to_string()),
            body: "std::mem::swap(&mut a, &mut b);".to_string(),
            language: Some("rust".to_string()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnswerRequest {
    pub body: String,
}

#[derive(Debug, Deserialize)]
pub struct ContentData {
    pub id: String,
    pub kind: String,
    pub author_id: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    pub upvotes: i64,
    pub downvotes: i64,
    pub score: i64,
}

#[derive(Debug, Deserialize)]
pub struct PageData<T> {
    pub items: Vec<T>,
    pub pagination: PaginationData,
}

#[derive(Debug, Deserialize)]
pub struct PaginationData {
    #[serde(default)]
    pub before: Option<String>,
    pub has_more: bool,
    pub limit: i64,
}

#[derive(Debug, Serialize)]
pub struct CommentRequest {
    pub body: String,
}

#[derive(Debug, Deserialize)]
pub struct CommentData {
    pub id: String,
    pub content_id: String,
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct VoteRequest {
    pub vote_type: String,
    pub voteable_type: String,
}

impl VoteRequest {
    pub fn new(vote_type: &str, voteable_type: &str) -> Self {
        Self {
            vote_type: vote_type.to_string(),
            voteable_type: voteable_type.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct VoteData {
    pub target_id: String,
    pub voteable_type: String,
    pub vote_type: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleData {
    pub vote_type: Option<String>,
    pub upvotes: i64,
    pub downvotes: i64,
}

#[derive(Debug, Deserialize)]
pub struct TallyData {
    pub upvotes: i64,
    pub downvotes: i64,
    pub score: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkRequest {
    pub item_id: String,
    pub item_type: String,
}

impl BookmarkRequest {
    pub fn new(item_id: &str, item_type: &str) -> Self {
        Self {
            item_id: item_id.to_string(),
            item_type: item_type.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkData {
    pub item_id: String,
    pub item_type: String,
}
