//! Content item and comment database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for content_items table
#[derive(Debug, Clone, FromRow)]
pub struct ContentItemModel {
    pub id: i64,
    pub kind: String,
    pub author_id: i64,
    pub parent_id: Option<i64>,
    pub title: Option<String>,
    pub body: String,
    pub language: Option<String>,
    pub tags: Vec<String>,
    pub image_urls: Vec<String>,
    pub links: Vec<String>,
    pub upvote_count: i32,
    pub downvote_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub content_id: i64,
    pub author_id: i64,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
