//! User handlers

use axum::extract::State;
use devhub_service::dto::{CurrentUserResponse, PublicUserResponse, UpdateProfileRequest};
use devhub_service::UserService;

use crate::extractors::{AuthUser, SnowflakePath, ValidatedJson};
use crate::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// Get current user
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiResponse<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_current_user(auth.user_id).await?;
    Ok(ApiResponse::ok("User retrieved", response))
}

/// Update the current user's profile
///
/// PATCH /users/@me
pub async fn update_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<ApiResponse<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_profile(auth.user_id, request).await?;
    Ok(ApiResponse::ok("Profile updated", response))
}

/// Public profile, including reputation
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    SnowflakePath(user_id): SnowflakePath,
) -> ApiResult<ApiResponse<PublicUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_user(user_id).await?;
    Ok(ApiResponse::ok("User retrieved", response))
}
