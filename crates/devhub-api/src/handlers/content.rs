//! Content handlers
//!
//! Publishing posts, questions, articles, snippets, and answers, plus the
//! shared read and delete routes under `/content`.

use axum::extract::State;
use devhub_service::dto::{
    ContentResponse, CreateAnswerRequest, CreateContentRequest, ListContentQuery, PageResponse,
};
use devhub_service::ContentService;

use crate::extractors::{AuthUser, SnowflakePath, ValidatedJson, ValidatedQuery};
use crate::response::{ApiResponse, ApiResult, Created};
use crate::state::AppState;

type CreatedContent = ApiResult<Created<ApiResponse<ContentResponse>>>;

/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateContentRequest>,
) -> CreatedContent {
    let item = ContentService::new(state.service_context())
        .create_post(auth.user_id, request)
        .await?;
    Ok(Created(ApiResponse::ok("Post created", item)))
}

/// POST /questions
pub async fn create_question(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateContentRequest>,
) -> CreatedContent {
    let item = ContentService::new(state.service_context())
        .create_question(auth.user_id, request)
        .await?;
    Ok(Created(ApiResponse::ok("Question created", item)))
}

/// POST /articles
pub async fn create_article(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateContentRequest>,
) -> CreatedContent {
    let item = ContentService::new(state.service_context())
        .create_article(auth.user_id, request)
        .await?;
    Ok(Created(ApiResponse::ok("Article created", item)))
}

/// POST /snippets
pub async fn create_snippet(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateContentRequest>,
) -> CreatedContent {
    let item = ContentService::new(state.service_context())
        .create_snippet(auth.user_id, request)
        .await?;
    Ok(Created(ApiResponse::ok("Snippet created", item)))
}

/// POST /questions/{id}/answers
pub async fn create_answer(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(question_id): SnowflakePath,
    ValidatedJson(request): ValidatedJson<CreateAnswerRequest>,
) -> CreatedContent {
    let item = ContentService::new(state.service_context())
        .create_answer(auth.user_id, question_id, request)
        .await?;
    Ok(Created(ApiResponse::ok("Answer created", item)))
}

/// GET /questions/{id}/answers
pub async fn list_answers(
    State(state): State<AppState>,
    SnowflakePath(question_id): SnowflakePath,
) -> ApiResult<ApiResponse<Vec<ContentResponse>>> {
    let answers = ContentService::new(state.service_context())
        .list_answers(question_id)
        .await?;
    Ok(ApiResponse::ok("Answers retrieved", answers))
}

/// Newest first, paged by `before`
///
/// GET /content?kind=&author_id=&limit=&before=
pub async fn list_content(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListContentQuery>,
) -> ApiResult<ApiResponse<PageResponse<ContentResponse>>> {
    let page = ContentService::new(state.service_context())
        .list(query)
        .await?;
    Ok(ApiResponse::ok("Content retrieved", page))
}

/// GET /content/{id}
pub async fn get_content(
    State(state): State<AppState>,
    SnowflakePath(id): SnowflakePath,
) -> ApiResult<ApiResponse<ContentResponse>> {
    let item = ContentService::new(state.service_context()).get(id).await?;
    Ok(ApiResponse::ok("Content retrieved", item))
}

/// Author only; votes, bookmarks, comments, and answers go with it
///
/// DELETE /content/{id}
pub async fn delete_content(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(id): SnowflakePath,
) -> ApiResult<ApiResponse<()>> {
    ContentService::new(state.service_context())
        .delete(auth.user_id, id)
        .await?;
    Ok(ApiResponse::message("Content deleted"))
}
