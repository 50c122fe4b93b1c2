//! Content, vote-target, and bookmark kinds plus vote direction
//!
//! All kinds serialize as lowercase strings (`"post"`, `"question"`, ...), which
//! is also how they are stored in PostgreSQL.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error when parsing a kind or direction from a string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {expected}: {value}")]
pub struct KindParseError {
    pub expected: &'static str,
    pub value: String,
}

impl KindParseError {
    fn new(expected: &'static str, value: &str) -> Self {
        Self {
            expected,
            value: value.to_string(),
        }
    }
}

// ============================================================================
// Content Kind
// ============================================================================

/// Every kind of user-authored content item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Post,
    Question,
    Answer,
    Article,
    Snippet,
}

impl ContentKind {
    pub const ALL: [ContentKind; 5] = [
        Self::Post,
        Self::Question,
        Self::Answer,
        Self::Article,
        Self::Snippet,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Question => "question",
            Self::Answer => "answer",
            Self::Article => "article",
            Self::Snippet => "snippet",
        }
    }

    /// Whether items of this kind must carry a title
    #[must_use]
    pub const fn requires_title(self) -> bool {
        matches!(self, Self::Question | Self::Article | Self::Snippet)
    }

    /// Whether items of this kind hang off a parent item
    #[must_use]
    pub const fn requires_parent(self) -> bool {
        matches!(self, Self::Answer)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "post" => Ok(Self::Post),
            "question" => Ok(Self::Question),
            "answer" => Ok(Self::Answer),
            "article" => Ok(Self::Article),
            "snippet" => Ok(Self::Snippet),
            _ => Err(KindParseError::new("content kind", s)),
        }
    }
}

// ============================================================================
// Vote Target Kind
// ============================================================================

/// Content kinds that accept votes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteTargetKind {
    Post,
    Question,
    Answer,
    Article,
}

impl VoteTargetKind {
    pub const ALL: [VoteTargetKind; 4] = [Self::Post, Self::Question, Self::Answer, Self::Article];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.content_kind().as_str()
    }

    #[must_use]
    pub const fn content_kind(self) -> ContentKind {
        match self {
            Self::Post => ContentKind::Post,
            Self::Question => ContentKind::Question,
            Self::Answer => ContentKind::Answer,
            Self::Article => ContentKind::Article,
        }
    }
}

impl fmt::Display for VoteTargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<ContentKind> for VoteTargetKind {
    type Error = KindParseError;

    fn try_from(kind: ContentKind) -> Result<Self, Self::Error> {
        match kind {
            ContentKind::Post => Ok(Self::Post),
            ContentKind::Question => Ok(Self::Question),
            ContentKind::Answer => Ok(Self::Answer),
            ContentKind::Article => Ok(Self::Article),
            ContentKind::Snippet => Err(KindParseError::new("vote target kind", kind.as_str())),
        }
    }
}

impl FromStr for VoteTargetKind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<ContentKind>()
            .ok()
            .and_then(|kind| Self::try_from(kind).ok())
            .ok_or_else(|| KindParseError::new("vote target kind", s))
    }
}

// ============================================================================
// Bookmark Kind
// ============================================================================

/// Content kinds that can be bookmarked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookmarkKind {
    Article,
    Post,
    Snippet,
    Question,
}

impl BookmarkKind {
    pub const ALL: [BookmarkKind; 4] = [Self::Article, Self::Post, Self::Snippet, Self::Question];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.content_kind().as_str()
    }

    #[must_use]
    pub const fn content_kind(self) -> ContentKind {
        match self {
            Self::Article => ContentKind::Article,
            Self::Post => ContentKind::Post,
            Self::Snippet => ContentKind::Snippet,
            Self::Question => ContentKind::Question,
        }
    }
}

impl fmt::Display for BookmarkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookmarkKind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "article" => Ok(Self::Article),
            "post" => Ok(Self::Post),
            "snippet" => Ok(Self::Snippet),
            "question" => Ok(Self::Question),
            _ => Err(KindParseError::new("item type", s)),
        }
    }
}

// ============================================================================
// Vote Direction
// ============================================================================

/// Direction of a vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Upvote,
    Downvote,
}

impl VoteDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upvote => "upvote",
            Self::Downvote => "downvote",
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Upvote => Self::Downvote,
            Self::Downvote => Self::Upvote,
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteDirection {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upvote" => Ok(Self::Upvote),
            "downvote" => Ok(Self::Downvote),
            _ => Err(KindParseError::new("vote type", s)),
        }
    }
}
