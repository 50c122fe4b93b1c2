//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use devhub_core::entities::{Bookmark, Comment, ContentItem, User, Vote, VoteTally};

use super::responses::{
    AuthorSummary, BookmarkResponse, CommentResponse, ContentResponse, CurrentUserResponse,
    PublicUserResponse, TallyResponse, VoteResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            avatar_url: user.avatar_url.clone(),
            bio: user.bio.clone(),
            interests: user.interests.clone(),
            links: user.links.clone(),
            reputation_points: user.reputation_points,
            created_at: user.created_at,
        }
    }
}

impl From<&User> for PublicUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            avatar_url: user.avatar_url.clone(),
            bio: user.bio.clone(),
            interests: user.interests.clone(),
            links: user.links.clone(),
            reputation_points: user.reputation_points,
            created_at: user.created_at,
        }
    }
}

impl From<&User> for AuthorSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            avatar_url: user.avatar_url.clone(),
            reputation_points: user.reputation_points,
        }
    }
}

// ============================================================================
// Content Mappers
// ============================================================================

/// A content item together with its author, when known
pub struct ContentWithAuthor {
    pub item: ContentItem,
    pub author: Option<User>,
}

impl From<ContentWithAuthor> for ContentResponse {
    fn from(data: ContentWithAuthor) -> Self {
        let tally = data.item.tally();
        let item = data.item;
        Self {
            id: item.id.to_string(),
            kind: item.kind,
            author_id: item.author_id.to_string(),
            author: data.author.as_ref().map(AuthorSummary::from),
            parent_id: item.parent_id.map(|id| id.to_string()),
            title: item.title,
            body: item.body,
            language: item.language,
            tags: item.tags,
            image_urls: item.image_urls,
            links: item.links,
            upvotes: tally.upvotes,
            downvotes: tally.downvotes,
            score: tally.score(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

impl From<ContentItem> for ContentResponse {
    fn from(item: ContentItem) -> Self {
        Self::from(ContentWithAuthor { item, author: None })
    }
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            content_id: comment.content_id.to_string(),
            author_id: comment.author_id.to_string(),
            body: comment.body.clone(),
            created_at: comment.created_at,
        }
    }
}

// ============================================================================
// Vote & Bookmark Mappers
// ============================================================================

impl From<&Vote> for VoteResponse {
    fn from(vote: &Vote) -> Self {
        Self {
            user_id: vote.user_id.to_string(),
            target_id: vote.target_id.to_string(),
            voteable_type: vote.target_kind,
            vote_type: vote.direction,
            created_at: vote.created_at,
        }
    }
}

impl From<VoteTally> for TallyResponse {
    fn from(tally: VoteTally) -> Self {
        Self {
            upvotes: tally.upvotes,
            downvotes: tally.downvotes,
            score: tally.score(),
        }
    }
}

impl From<&Bookmark> for BookmarkResponse {
    fn from(bookmark: &Bookmark) -> Self {
        Self {
            item_id: bookmark.item_id.to_string(),
            item_type: bookmark.item_kind,
            created_at: bookmark.created_at,
        }
    }
}
