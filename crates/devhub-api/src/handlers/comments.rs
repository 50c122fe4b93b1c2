//! Comment handlers

use axum::extract::State;
use devhub_service::dto::{CommentResponse, CreateCommentRequest};
use devhub_service::CommentService;

use crate::extractors::{AuthUser, SnowflakePath, ValidatedJson};
use crate::response::{ApiResponse, ApiResult, Created};
use crate::state::AppState;

/// POST /content/{id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(content_id): SnowflakePath,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<ApiResponse<CommentResponse>>> {
    let comment = CommentService::new(state.service_context())
        .create(auth.user_id, content_id, request)
        .await?;
    Ok(Created(ApiResponse::ok("Comment created", comment)))
}

/// GET /content/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    SnowflakePath(content_id): SnowflakePath,
) -> ApiResult<ApiResponse<Vec<CommentResponse>>> {
    let comments = CommentService::new(state.service_context())
        .list(content_id)
        .await?;
    Ok(ApiResponse::ok("Comments retrieved", comments))
}

/// DELETE /comments/{id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(id): SnowflakePath,
) -> ApiResult<ApiResponse<()>> {
    CommentService::new(state.service_context())
        .delete(auth.user_id, id)
        .await?;
    Ok(ApiResponse::message("Comment deleted"))
}
