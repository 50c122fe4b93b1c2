//! Vote handlers
//!
//! Add and remove routes are per kind (`/vote/add-post-vote/{id}`, ...);
//! the body's `voteable_type` must agree with the route.

use axum::extract::State;
use devhub_core::{Snowflake, VoteTargetKind};
use devhub_service::dto::{
    TallyResponse, ToggleVoteResponse, VoteCheckResponse, VoteRequest, VoteResponse,
};
use devhub_service::VoteService;

use crate::extractors::{AuthUser, SnowflakePath, ValidatedJson};
use crate::response::{ApiResponse, ApiResult, Created, FlatResponse};
use crate::state::AppState;

async fn add_vote(
    state: &AppState,
    user_id: Snowflake,
    target_id: Snowflake,
    kind: VoteTargetKind,
    request: &VoteRequest,
) -> ApiResult<Created<ApiResponse<VoteResponse>>> {
    let direction = VoteService::parse_for_kind(kind, request)?;
    let vote = VoteService::new(state.service_context())
        .add(user_id, target_id, kind, direction)
        .await?;
    Ok(Created(ApiResponse::ok("Vote added", vote)))
}

async fn remove_vote(
    state: &AppState,
    user_id: Snowflake,
    target_id: Snowflake,
    kind: VoteTargetKind,
) -> ApiResult<ApiResponse<()>> {
    VoteService::new(state.service_context())
        .remove(user_id, target_id, kind)
        .await?;
    Ok(ApiResponse::message("Vote removed"))
}

/// POST /vote/add-post-vote/{id}
pub async fn add_post_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(id): SnowflakePath,
    ValidatedJson(request): ValidatedJson<VoteRequest>,
) -> ApiResult<Created<ApiResponse<VoteResponse>>> {
    add_vote(&state, auth.user_id, id, VoteTargetKind::Post, &request).await
}

/// POST /vote/add-question-vote/{id}
pub async fn add_question_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(id): SnowflakePath,
    ValidatedJson(request): ValidatedJson<VoteRequest>,
) -> ApiResult<Created<ApiResponse<VoteResponse>>> {
    add_vote(&state, auth.user_id, id, VoteTargetKind::Question, &request).await
}

/// POST /vote/add-answer-vote/{id}
pub async fn add_answer_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(id): SnowflakePath,
    ValidatedJson(request): ValidatedJson<VoteRequest>,
) -> ApiResult<Created<ApiResponse<VoteResponse>>> {
    add_vote(&state, auth.user_id, id, VoteTargetKind::Answer, &request).await
}

/// POST /vote/add-article-vote/{id}
pub async fn add_article_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(id): SnowflakePath,
    ValidatedJson(request): ValidatedJson<VoteRequest>,
) -> ApiResult<Created<ApiResponse<VoteResponse>>> {
    add_vote(&state, auth.user_id, id, VoteTargetKind::Article, &request).await
}

/// DELETE /vote/remove-post-vote/{id}
pub async fn remove_post_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(id): SnowflakePath,
) -> ApiResult<ApiResponse<()>> {
    remove_vote(&state, auth.user_id, id, VoteTargetKind::Post).await
}

/// DELETE /vote/remove-question-vote/{id}
pub async fn remove_question_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(id): SnowflakePath,
) -> ApiResult<ApiResponse<()>> {
    remove_vote(&state, auth.user_id, id, VoteTargetKind::Question).await
}

/// DELETE /vote/remove-answer-vote/{id}
pub async fn remove_answer_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(id): SnowflakePath,
) -> ApiResult<ApiResponse<()>> {
    remove_vote(&state, auth.user_id, id, VoteTargetKind::Answer).await
}

/// DELETE /vote/remove-article-vote/{id}
pub async fn remove_article_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(id): SnowflakePath,
) -> ApiResult<ApiResponse<()>> {
    remove_vote(&state, auth.user_id, id, VoteTargetKind::Article).await
}

/// The caller's vote on an item: `{success, message, vote_type}`
///
/// GET /vote/check/{id}
pub async fn check_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(id): SnowflakePath,
) -> ApiResult<FlatResponse<VoteCheckResponse>> {
    let response = VoteService::new(state.service_context())
        .check(auth.user_id, id)
        .await?;
    Ok(FlatResponse::ok("Vote status retrieved", response))
}

/// POST /vote/toggle/{id}
pub async fn toggle_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(id): SnowflakePath,
    ValidatedJson(request): ValidatedJson<VoteRequest>,
) -> ApiResult<ApiResponse<ToggleVoteResponse>> {
    let (kind, direction) = VoteService::parse(&request)?;
    let response = VoteService::new(state.service_context())
        .toggle(auth.user_id, id, kind, direction)
        .await?;
    Ok(ApiResponse::ok("Vote toggled", response))
}

/// GET /vote/tally/{id}
pub async fn tally(
    State(state): State<AppState>,
    SnowflakePath(id): SnowflakePath,
) -> ApiResult<ApiResponse<TallyResponse>> {
    let response = VoteService::new(state.service_context()).tally(id).await?;
    Ok(ApiResponse::ok("Tally retrieved", response))
}

/// Rebuild an item's counters from its votes
///
/// POST /vote/recount/{id}
pub async fn recount(
    State(state): State<AppState>,
    _auth: AuthUser,
    SnowflakePath(id): SnowflakePath,
) -> ApiResult<ApiResponse<TallyResponse>> {
    let response = VoteService::new(state.service_context()).recount(id).await?;
    Ok(ApiResponse::ok("Counters recounted", response))
}
