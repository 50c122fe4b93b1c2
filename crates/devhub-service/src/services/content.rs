//! Content service
//!
//! Publishing, reading, and deleting posts, questions, answers, articles, and
//! snippets. Publishing credits the author's reputation in the same write.

use std::collections::HashMap;

use devhub_core::entities::{ContentItem, User};
use devhub_core::reputation::{ReputationAction, ReputationAward};
use devhub_core::traits::{ContentQuery, MAX_PAGE_SIZE};
use devhub_core::{ContentKind, DomainError, NewContent, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    ContentResponse, ContentWithAuthor, CreateAnswerRequest, CreateContentRequest,
    ListContentQuery, PageResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::parse_id;

/// Page size when the client does not ask for one
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Content service
pub struct ContentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ContentService<'a> {
    /// Create a new ContentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    pub async fn create_post(
        &self,
        author_id: Snowflake,
        request: CreateContentRequest,
    ) -> ServiceResult<ContentResponse> {
        self.create(author_id, ContentKind::Post, request).await
    }

    pub async fn create_question(
        &self,
        author_id: Snowflake,
        request: CreateContentRequest,
    ) -> ServiceResult<ContentResponse> {
        self.create(author_id, ContentKind::Question, request).await
    }

    pub async fn create_article(
        &self,
        author_id: Snowflake,
        request: CreateContentRequest,
    ) -> ServiceResult<ContentResponse> {
        self.create(author_id, ContentKind::Article, request).await
    }

    pub async fn create_snippet(
        &self,
        author_id: Snowflake,
        request: CreateContentRequest,
    ) -> ServiceResult<ContentResponse> {
        self.create(author_id, ContentKind::Snippet, request).await
    }

    /// Publish a top-level item of the given kind
    #[instrument(skip(self, request), fields(kind = %kind))]
    pub async fn create(
        &self,
        author_id: Snowflake,
        kind: ContentKind,
        request: CreateContentRequest,
    ) -> ServiceResult<ContentResponse> {
        if kind == ContentKind::Answer {
            return Err(ServiceError::validation(
                "Answers are created on their question",
            ));
        }

        let item = ContentItem::create(
            self.ctx.generate_id(),
            kind,
            author_id,
            None,
            NewContent::from(request),
        )?;
        self.publish(item).await
    }

    /// Answer a question
    #[instrument(skip(self, request))]
    pub async fn create_answer(
        &self,
        author_id: Snowflake,
        question_id: Snowflake,
        request: CreateAnswerRequest,
    ) -> ServiceResult<ContentResponse> {
        self.require_question(question_id).await?;

        let item = ContentItem::create(
            self.ctx.generate_id(),
            ContentKind::Answer,
            author_id,
            Some(question_id),
            NewContent {
                body: request.body,
                links: request.links,
                ..Default::default()
            },
        )?;
        self.publish(item).await
    }

    async fn publish(&self, item: ContentItem) -> ServiceResult<ContentResponse> {
        let award = ReputationAward::new(item.author_id, ReputationAction::Published(item.kind));
        self.ctx.content_repo().create(&item, award).await?;

        info!(
            content_id = %item.id,
            author_id = %item.author_id,
            kind = %item.kind,
            points = award.points,
            "Content published"
        );

        let author = self.ctx.user_repo().find_by_id(item.author_id).await?;
        Ok(ContentResponse::from(ContentWithAuthor { item, author }))
    }

    /// Get an item with its author and vote counts
    #[instrument(skip(self))]
    pub async fn get(&self, id: Snowflake) -> ServiceResult<ContentResponse> {
        let item = self.find(id).await?;
        let author = self.ctx.user_repo().find_by_id(item.author_id).await?;
        Ok(ContentResponse::from(ContentWithAuthor { item, author }))
    }

    /// Newest-first listing; answers appear only when asked for by kind
    #[instrument(skip(self))]
    pub async fn list(&self, query: ListContentQuery) -> ServiceResult<PageResponse<ContentResponse>> {
        let kind = query
            .kind
            .as_deref()
            .map(str::parse::<ContentKind>)
            .transpose()
            .map_err(|e| ServiceError::validation(e.to_string()))?;
        let author_id = query
            .author_id
            .as_deref()
            .map(|raw| parse_id("author_id", raw))
            .transpose()?;
        let before = query
            .before
            .as_deref()
            .map(|raw| parse_id("before", raw))
            .transpose()?;
        let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

        // One extra row tells whether another page exists
        let mut items = self
            .ctx
            .content_repo()
            .list(ContentQuery {
                kind,
                author_id,
                before,
                limit: limit + 1,
            })
            .await?;

        let has_more = items.len() as i64 > limit;
        items.truncate(limit as usize);
        let cursor = if has_more {
            items.last().map(|item| item.id.to_string())
        } else {
            None
        };

        let responses = self.with_authors(items).await?;
        Ok(PageResponse::new(responses, cursor, has_more, limit))
    }

    /// Answers to a question, oldest first
    #[instrument(skip(self))]
    pub async fn list_answers(&self, question_id: Snowflake) -> ServiceResult<Vec<ContentResponse>> {
        self.require_question(question_id).await?;
        let answers = self.ctx.content_repo().find_answers(question_id).await?;
        self.with_authors(answers).await
    }

    /// Delete an item the caller wrote; reputation already earned is kept
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: Snowflake, id: Snowflake) -> ServiceResult<()> {
        let item = self.find(id).await?;
        if !item.is_authored_by(user_id) {
            return Err(DomainError::NotContentAuthor.into());
        }

        self.ctx.content_repo().delete(id).await?;
        info!(content_id = %id, kind = %item.kind, "Content deleted");
        Ok(())
    }

    async fn find(&self, id: Snowflake) -> ServiceResult<ContentItem> {
        Ok(self
            .ctx
            .content_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ContentNotFound(id))?)
    }

    async fn require_question(&self, id: Snowflake) -> ServiceResult<ContentItem> {
        let item = self.find(id).await?;
        if item.kind != ContentKind::Question {
            return Err(DomainError::ContentNotFound(id).into());
        }
        Ok(item)
    }

    async fn with_authors(&self, items: Vec<ContentItem>) -> ServiceResult<Vec<ContentResponse>> {
        let mut authors: HashMap<Snowflake, Option<User>> = HashMap::new();
        for item in &items {
            if !authors.contains_key(&item.author_id) {
                let author = self.ctx.user_repo().find_by_id(item.author_id).await?;
                authors.insert(item.author_id, author);
            }
        }

        Ok(items
            .into_iter()
            .map(|item| {
                let author = authors.get(&item.author_id).cloned().flatten();
                ContentResponse::from(ContentWithAuthor { item, author })
            })
            .collect())
    }
}
