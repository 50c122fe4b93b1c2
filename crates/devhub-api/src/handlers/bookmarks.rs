//! Bookmark handlers

use axum::extract::{Query, State};
use devhub_service::dto::{
    BookmarkCheckResponse, BookmarkRequest, BookmarkResponse, ListBookmarksQuery,
};
use devhub_service::BookmarkService;

use crate::extractors::{AuthUser, ValidatedJson, ValidatedQuery};
use crate::response::{ApiResponse, ApiResult, Created, FlatResponse};
use crate::state::AppState;

/// POST /bookmark/add-bookmark
pub async fn add_bookmark(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<BookmarkRequest>,
) -> ApiResult<Created<ApiResponse<BookmarkResponse>>> {
    let bookmark = BookmarkService::new(state.service_context())
        .add(auth.user_id, request)
        .await?;
    Ok(Created(ApiResponse::ok("Bookmark added", bookmark)))
}

/// DELETE /bookmark/remove
pub async fn remove_bookmark(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<BookmarkRequest>,
) -> ApiResult<ApiResponse<()>> {
    BookmarkService::new(state.service_context())
        .remove(auth.user_id, request)
        .await?;
    Ok(ApiResponse::message("Bookmark removed"))
}

/// `{success, message, isBookmarked}`
///
/// GET /bookmark/check?itemId=&itemType=
pub async fn check_bookmark(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedQuery(request): ValidatedQuery<BookmarkRequest>,
) -> ApiResult<FlatResponse<BookmarkCheckResponse>> {
    let is_bookmarked = BookmarkService::new(state.service_context())
        .check(auth.user_id, request)
        .await?;
    Ok(FlatResponse::ok(
        "Bookmark status retrieved",
        BookmarkCheckResponse { is_bookmarked },
    ))
}

/// GET /bookmark/list?itemType=
pub async fn list_bookmarks(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListBookmarksQuery>,
) -> ApiResult<ApiResponse<Vec<BookmarkResponse>>> {
    let bookmarks = BookmarkService::new(state.service_context())
        .list(auth.user_id, query)
        .await?;
    Ok(ApiResponse::ok("Bookmarks retrieved", bookmarks))
}
