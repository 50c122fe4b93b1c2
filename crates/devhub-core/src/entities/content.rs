//! Content item entity - posts, questions, answers, articles, and snippets
//!
//! All five kinds share one shape. Kind-specific rules (titles, parents,
//! snippet language) are enforced when the item is built from [`NewContent`].

use chrono::{DateTime, Utc};

use crate::entities::VoteTally;
use crate::error::DomainError;
use crate::value_objects::{ContentKind, Snowflake};

pub const MAX_TITLE_LENGTH: usize = 300;
pub const MAX_BODY_LENGTH: usize = 40_000;
pub const MAX_TAGS: usize = 10;
pub const MAX_ATTACHMENTS: usize = 10;

/// Content item entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    pub id: Snowflake,
    pub kind: ContentKind,
    pub author_id: Snowflake,
    /// The question an answer belongs to
    pub parent_id: Option<Snowflake>,
    pub title: Option<String>,
    pub body: String,
    /// Programming language of a snippet
    pub language: Option<String>,
    pub tags: Vec<String>,
    pub image_urls: Vec<String>,
    pub links: Vec<String>,
    pub upvote_count: i32,
    pub downvote_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Author-supplied fields for a new content item
#[derive(Debug, Clone, Default)]
pub struct NewContent {
    pub title: Option<String>,
    pub body: String,
    pub language: Option<String>,
    pub tags: Vec<String>,
    pub image_urls: Vec<String>,
    pub links: Vec<String>,
}

impl ContentItem {
    /// Build a content item, enforcing the rules of its kind
    ///
    /// # Errors
    /// Returns `DomainError::ValidationError` or `DomainError::ContentTooLong`
    /// when the fields do not fit the kind.
    pub fn create(
        id: Snowflake,
        kind: ContentKind,
        author_id: Snowflake,
        parent_id: Option<Snowflake>,
        fields: NewContent,
    ) -> Result<Self, DomainError> {
        let title = fields
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        match (&title, kind) {
            (None, k) if k.requires_title() => {
                return Err(DomainError::ValidationError(format!("A {k} requires a title")));
            }
            (Some(_), ContentKind::Answer) => {
                return Err(DomainError::ValidationError(
                    "An answer cannot have a title".to_string(),
                ));
            }
            (Some(t), _) if t.chars().count() > MAX_TITLE_LENGTH => {
                return Err(DomainError::ContentTooLong {
                    max: MAX_TITLE_LENGTH,
                });
            }
            _ => {}
        }

        if kind.requires_parent() != parent_id.is_some() {
            return Err(DomainError::ValidationError(format!(
                "A {kind} {} a parent item",
                if kind.requires_parent() { "requires" } else { "cannot have" }
            )));
        }

        let body = fields.body.trim().to_string();
        if body.is_empty() {
            return Err(DomainError::ValidationError("Body cannot be empty".to_string()));
        }
        if body.chars().count() > MAX_BODY_LENGTH {
            return Err(DomainError::ContentTooLong {
                max: MAX_BODY_LENGTH,
            });
        }

        let language = match kind {
            ContentKind::Snippet => Some(
                fields
                    .language
                    .map(|l| l.trim().to_ascii_lowercase())
                    .filter(|l| !l.is_empty())
                    .unwrap_or_else(|| "plaintext".to_string()),
            ),
            _ => None,
        };

        let tags = normalize_tags(fields.tags);
        if tags.len() > MAX_TAGS {
            return Err(DomainError::ValidationError(format!(
                "At most {MAX_TAGS} tags are allowed"
            )));
        }
        if fields.image_urls.len() > MAX_ATTACHMENTS || fields.links.len() > MAX_ATTACHMENTS {
            return Err(DomainError::ValidationError(format!(
                "At most {MAX_ATTACHMENTS} images and {MAX_ATTACHMENTS} links are allowed"
            )));
        }

        let now = Utc::now();
        Ok(Self {
            id,
            kind,
            author_id,
            parent_id,
            title,
            body,
            language,
            tags,
            image_urls: fields.image_urls,
            links: fields.links,
            upvote_count: 0,
            downvote_count: 0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Current up/down counts
    #[must_use]
    pub fn tally(&self) -> VoteTally {
        VoteTally::new(i64::from(self.upvote_count), i64::from(self.downvote_count))
    }

    #[inline]
    pub fn is_authored_by(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }
}

/// Lowercase, trim, drop blanks and duplicates
fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}
