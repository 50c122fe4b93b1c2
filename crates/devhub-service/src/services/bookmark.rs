//! Bookmark service
//!
//! Bookmarks are independent of votes: saving an item neither needs nor
//! changes a vote, and earns no reputation.

use devhub_core::entities::Bookmark;
use devhub_core::{BookmarkKind, DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{BookmarkRequest, BookmarkResponse, ListBookmarksQuery};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::parse_id;

/// Bookmark service
pub struct BookmarkService<'a> {
    ctx: &'a ServiceContext,
}

fn parse_kind(raw: &str) -> ServiceResult<BookmarkKind> {
    raw.parse::<BookmarkKind>().map_err(|_| {
        ServiceError::validation(format!(
            "Invalid itemType '{raw}': expected article, post, snippet, or question"
        ))
    })
}

fn parse_target(request: &BookmarkRequest) -> ServiceResult<(Snowflake, BookmarkKind)> {
    let kind = parse_kind(&request.item_type)?;
    let item_id = parse_id("itemId", &request.item_id)?;
    Ok((item_id, kind))
}

impl<'a> BookmarkService<'a> {
    /// Create a new BookmarkService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Save an item; it must exist and be of the given type
    #[instrument(skip(self, request))]
    pub async fn add(
        &self,
        user_id: Snowflake,
        request: BookmarkRequest,
    ) -> ServiceResult<BookmarkResponse> {
        let (item_id, kind) = parse_target(&request)?;

        let matches = self
            .ctx
            .content_repo()
            .find_by_id(item_id)
            .await?
            .is_some_and(|item| item.kind == kind.content_kind());
        if !matches {
            return Err(DomainError::ContentNotFound(item_id).into());
        }

        let bookmark = Bookmark::new(user_id, item_id, kind);
        self.ctx.bookmark_repo().create(&bookmark).await?;

        info!(user_id = %user_id, item_id = %item_id, kind = %kind, "Bookmark added");
        Ok(BookmarkResponse::from(&bookmark))
    }

    /// Remove a bookmark saved under the given type
    #[instrument(skip(self, request))]
    pub async fn remove(&self, user_id: Snowflake, request: BookmarkRequest) -> ServiceResult<()> {
        let (item_id, kind) = parse_target(&request)?;
        self.ctx.bookmark_repo().delete(user_id, item_id, kind).await?;

        info!(user_id = %user_id, item_id = %item_id, "Bookmark removed");
        Ok(())
    }

    #[instrument(skip(self, request))]
    pub async fn check(&self, user_id: Snowflake, request: BookmarkRequest) -> ServiceResult<bool> {
        let (item_id, kind) = parse_target(&request)?;
        Ok(self.ctx.bookmark_repo().exists(user_id, item_id, kind).await?)
    }

    /// The caller's bookmarks, newest first, optionally of one type
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        user_id: Snowflake,
        query: ListBookmarksQuery,
    ) -> ServiceResult<Vec<BookmarkResponse>> {
        let kind = query.item_type.as_deref().map(parse_kind).transpose()?;
        let bookmarks = self.ctx.bookmark_repo().find_by_user(user_id, kind).await?;
        Ok(bookmarks.iter().map(BookmarkResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{reputation, seed_item, seed_user, test_context};
    use devhub_core::ContentKind;

    fn request(item_id: Snowflake, item_type: &str) -> BookmarkRequest {
        BookmarkRequest {
            item_id: item_id.to_string(),
            item_type: item_type.to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_check_remove() {
        let (ctx, _) = test_context();
        let user = seed_user(&ctx, "ada").await;
        let article = seed_item(&ctx, user.id, ContentKind::Article).await;
        let service = BookmarkService::new(&ctx);

        assert!(!service.check(user.id, request(article.id, "article")).await.unwrap());

        service.add(user.id, request(article.id, "article")).await.unwrap();
        assert!(service.check(user.id, request(article.id, "article")).await.unwrap());

        let err = service
            .add(user.id, request(article.id, "article"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 409);

        service.remove(user.id, request(article.id, "article")).await.unwrap();
        assert!(!service.check(user.id, request(article.id, "article")).await.unwrap());

        let err = service
            .remove(user.id, request(article.id, "article"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);

        // Bookmarks earn nothing
        assert_eq!(reputation(&ctx, user.id).await, 2);
    }

    #[tokio::test]
    async fn test_invalid_item_type_is_400() {
        let (ctx, _) = test_context();
        let user = seed_user(&ctx, "ada").await;
        let post = seed_item(&ctx, user.id, ContentKind::Post).await;
        let service = BookmarkService::new(&ctx);

        for bad in ["answer", "comment", "Post", ""] {
            let err = service.add(user.id, request(post.id, bad)).await.unwrap_err();
            assert_eq!(err.status_code(), 400, "itemType {bad:?}");
        }
    }

    #[tokio::test]
    async fn test_type_mismatch_or_missing_item_is_404() {
        let (ctx, _) = test_context();
        let user = seed_user(&ctx, "ada").await;
        let post = seed_item(&ctx, user.id, ContentKind::Post).await;
        let service = BookmarkService::new(&ctx);

        let err = service.add(user.id, request(post.id, "snippet")).await.unwrap_err();
        assert_eq!(err.status_code(), 404);

        let err = service
            .add(user.id, request(Snowflake::new(4242), "post"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_remove_and_check_respect_item_type() {
        let (ctx, _) = test_context();
        let user = seed_user(&ctx, "ada").await;
        let article = seed_item(&ctx, user.id, ContentKind::Article).await;
        let service = BookmarkService::new(&ctx);

        service.add(user.id, request(article.id, "article")).await.unwrap();
        assert!(!service.check(user.id, request(article.id, "post")).await.unwrap());

        let err = service
            .remove(user.id, request(article.id, "post"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_BOOKMARK");
        assert!(service.check(user.id, request(article.id, "article")).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_filters_by_type() {
        let (ctx, _) = test_context();
        let user = seed_user(&ctx, "ada").await;
        let post = seed_item(&ctx, user.id, ContentKind::Post).await;
        let snippet = seed_item(&ctx, user.id, ContentKind::Snippet).await;
        let service = BookmarkService::new(&ctx);

        service.add(user.id, request(post.id, "post")).await.unwrap();
        service.add(user.id, request(snippet.id, "snippet")).await.unwrap();

        let all = service.list(user.id, ListBookmarksQuery::default()).await.unwrap();
        assert_eq!(all.len(), 2);

        let snippets = service
            .list(
                user.id,
                ListBookmarksQuery {
                    item_type: Some("snippet".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(snippets.len(), 1);
        assert_eq!(snippets[0].item_id, snippet.id.to_string());
    }

    #[tokio::test]
    async fn test_bookmarks_go_with_deleted_item() {
        let (ctx, _) = test_context();
        let user = seed_user(&ctx, "ada").await;
        let question = seed_item(&ctx, user.id, ContentKind::Question).await;
        let service = BookmarkService::new(&ctx);

        service.add(user.id, request(question.id, "question")).await.unwrap();
        ctx.content_repo().delete(question.id).await.unwrap();

        assert!(!service.check(user.id, request(question.id, "question")).await.unwrap());
    }
}
